/*!
# `JMP <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
Line numbers count from 1 and include blank and comment lines. Jumping
past the last line ends the program normally. A program that jumps
back forever runs until CTRL-C.

## Example
```text
jmp 3
push 1
push 2
write
```

*/
