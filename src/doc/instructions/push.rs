/*!
# `PUSH <integer | name | vector>`

## Purpose
Put a value on top of the stack.

## Remarks
A name pushes a copy of
the variable and fails with `VARIABLE NOT FOUND` if it was never
stored. A vector literal `<< a, b >>` pushes the vector.

Vector literals are collected when the file is scanned. Each executed
`push <<...>>` takes the next one in file order, so a loop that runs
the same vector `push` twice runs out with `VECTOR NOT FOUND`. Store
the vector in a variable to reuse it.

The stack holds at most 65536 values. Pushing more is
`OUT OF MEMORY; STACK OVERFLOW`.

## Example
```text
push 3
push << 4, 5, 6 >>
pop v
push v
```

*/
