/*!
# `END`

## Purpose
Stop the program.

## Remarks
Running past the last line stops the program the same way, so `end`
is only needed to stop early.

## Example
```text
push 1
write
end
write
```

*/
