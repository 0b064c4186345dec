/*!
# Integer Operators

| Operator      | Result                         |
|---------------|--------------------------------|
| `+`           | sum                            |
| `-`           | difference                     |
| `*`           | product                        |
| `/`           | quotient, rounded toward zero  |
| `%`           | remainder, sign of the left    |
| `=` or `==`   | 1 if equal, else 0             |
| `!=`          | 1 if not equal, else 0         |
| `<` `>`       | 1 if less, greater             |
| `<=` `>=`     | 1 if less or equal, greater or equal |

Each operator sits alone on its line, pops two integers and pushes
one. Vectors are a `TYPE MISMATCH`; fewer than two values is a
`STACK UNDERFLOW`. Dividing by zero is `DIVISION BY ZERO`. Arithmetic
wraps around on overflow.

```text
push 7
push 2
%
write      ; 1
```

*/
