/*!
# Error Messages

Errors print as `<MESSAGE> IN <line>` followed by `; <detail>` when
there is more to say.

| Message              | Cause                                               |
|----------------------|-----------------------------------------------------|
| `SYNTAX ERROR`       | a line doesn't scan or its operand is malformed     |
| `UNKNOWN COMMAND`    | the first word isn't an instruction                 |
| `UNDEFINED LINE`     | `jmp 0` or `ji 0`                                   |
| `STACK UNDERFLOW`    | not enough values on the stack                      |
| `TYPE MISMATCH`      | an integer where a vector belongs or the reverse    |
| `VARIABLE NOT FOUND` | `push` of a name never stored                       |
| `DIVISION BY ZERO`   | `/`, `%`, `vdiv` or `vmod` with a zero divisor      |
| `SIZE MISMATCH`      | vectors of different length                         |
| `INDEX OUT OF RANGE` | element access past the end of a vector             |
| `FORMAT ERROR`       | a vector or number that doesn't parse               |
| `VECTOR NOT FOUND`   | every vector literal has been pushed already        |
| `INVALID SHIFT`      | negative shift amount                               |
| `OUT OF MEMORY`      | the stack is full                                   |
| `BREAK`              | CTRL-C, or input closed during `read`               |
| `FILE NOT FOUND`     | the program file doesn't exist                      |
| `INTERNAL ERROR`     | something vstack itself got wrong                   |

*/
