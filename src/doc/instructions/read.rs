/*!
# `READ`

## Purpose
Read a line of input and push it.

## Remarks
The line is either an integer or a vector in `<< 1, -2 >>` form.
Anything else is a `FORMAT ERROR`. On a terminal the line may be
edited before pressing ENTER; when input is piped each `read` takes
the next line. Closing input while a `read` waits stops the program
with `BREAK`.

## Example
```text
read
read
+
write
```

*/
