/*!
# `JI <line number>`

## Purpose
Pop an integer and jump to `<line number>` if it is greater than zero.

## Remarks
Zero and negative values fall through to the next line. A vector on
top of the stack is a `TYPE MISMATCH` and an empty stack is a
`STACK UNDERFLOW`. Line `0` doesn't exist and is rejected with
`UNDEFINED LINE` before the program starts.

## Example
```text
push 2
push 1
>
ji 6
write      ; never reached, the stack is empty here anyway
push 100
write
```

*/
