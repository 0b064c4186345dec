/*!
# Vector Instructions

| Instruction | Pops              | Pushes                             |
|-------------|-------------------|------------------------------------|
| `vadd`      | vector, vector    | element by element sum             |
| `vsub`      | vector, vector    | element by element difference      |
| `vmul`      | vector, vector    | element by element product         |
| `vdiv`      | vector, vector    | element by element quotient        |
| `vmod`      | vector, vector    | element by element remainder       |
| `vdot`      | vector, vector    | integer sum of products            |
| `vconcat`   | vector, vector    | first vector followed by second    |
| `vlshift`   | integer, vector   | elements moved toward the start    |
| `vrshift`   | integer, vector   | elements moved toward the end      |

## Remarks
All but `vconcat` need vectors of equal length or stop with
`SIZE MISMATCH`. `vdiv` and `vmod` check the whole divisor first and
stop with `DIVISION BY ZERO` if any element is zero.

Shifts keep the length and fill with zeros. Push the vector first and
the shift amount second. Shifting by the length or more gives all
zeros; a negative amount is an `INVALID SHIFT`.

## Example
```text
push << 1, 2, 3, 4 >>
push 1
vlshift
write        ; << 2, 3, 4, 0 >>
```

*/
