/*!
# Program Structure

## Lines
A program is a sequence of lines. Each line holds at most one
instruction, and its position in the file is its line number. The
first line is line 1. Empty lines do nothing but keep their number.

## Comments
A `;` starts a comment that runs to the end of the line.

```text
push 1  ; the first one
```

## Keywords
`push pop jmp ji read write end vadd vsub vmul vdiv vmod vdot vconcat
vlshift vrshift` are reserved and may be written in any case. They
can't be used as variable names.

## Values
The stack holds two kinds of values.

| Kind    | Example          | Notes                                       |
|---------|------------------|---------------------------------------------|
| Integer | `42`             | 32 bit signed, arithmetic wraps on overflow |
| Vector  | `<< 1, 2, 3 >>`  | any length including `<< >>`                |

Literals in source are unsigned. Negative values come from arithmetic
or from a `read`, where both integers and vector elements may carry
a `-` sign.

## Operand order
Binary instructions pop the right hand operand first. For
`push 9`, `push 2`, `-` the result is `7`.

## Errors
Every line is checked before the program starts and all problems are
reported together. Once running, the first failing instruction stops
the program with an error naming its line.
See [Appendix A](../___Appendix_A/index.html).

*/
