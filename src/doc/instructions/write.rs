/*!
# `WRITE`

## Purpose
Pop the value on top of the stack and print it on its own line.

## Remarks
Vectors print as `<< 1, 2, 3 >>` and an empty vector as `<< >>`.

## Example
```text
push << 1, 2 >>
write
```

*/
