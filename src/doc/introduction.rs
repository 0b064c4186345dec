/*!
# Introductory Tutorial for VSTACK

VSTACK programs are plain text files with one instruction per line.
Every instruction works on a single stack of values. Write the
following into `hello.vs` and run it with `vstack hello.vs`.

```text
push 3
push 4
+
write
end
```

The program prints `7`. The first two lines push integers on to the
stack, `+` pops both of them and pushes their sum, and `write` pops
the result and prints it. When the program stops, `vstack` prints the
stack and the variables so you can see what was left behind. Pass
`--no-dump` to turn that off.

## Variables

`pop` moves the value on top of the stack into a named variable and
`push` with a name brings a copy back. Names begin with a letter and
continue with letters and digits. Like keywords, they ignore case.

```text
push 10
pop count
push count
push count
*
write
```

Pushing a name that was never popped to is a `VARIABLE NOT FOUND` error.

## Jumps

Jump targets are the line numbers of the source file, counting from 1.
Blank lines and comment lines still count. `jmp` always jumps, `ji`
pops an integer and jumps only when it is greater than zero.

```text
push 3          ; line 1
pop n           ; line 2
push n          ; line 3
write
push n
push 1
-
pop n
push n
ji 3            ; loop while n > 0
end
```

This prints `3`, `2` and `1`. A jump past the last line simply ends the
program.

## Vectors

A vector literal is written `<< 1, 2, 3 >>` and may only follow `push`.
The `v` family of instructions works on two vectors of the same length.

```text
push << 1, 2, 3 >>
push << 4, 5, 6 >>
vdot
write
```

This prints `32`. See the [instructions](../__Chapter_2/index.html) for the
whole set.

## Input

`read` waits for one line of input and pushes it. Type either an
integer such as `-5` or a vector such as `<< 1, 2 >>`. Stop a running
program with CTRL-C.

## Looking inside

`--tables` prints the constant, name and vector tables the scanner
built, and `--lexemes` prints every lexeme with its class code. With
`--from-lexemes` the program is rebuilt from the lexeme stream before
it runs, which is a quick way to check the scanner agrees with you.
Set `RUST_LOG=vstack=trace` to see every executed instruction.

*/
