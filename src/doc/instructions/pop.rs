/*!
# `POP <name>`

## Purpose
Remove the value on top of the stack and store it in a variable.

## Remarks
The variable is created on first use and replaced by later `pop`s.
Integers and vectors may be stored under the same name at different
times. An empty stack is a `STACK UNDERFLOW`.

## Example
```text
push << 1, 2 >>
pop v
```

*/
