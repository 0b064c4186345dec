/*!
# Instructions
*/

#[path = "instructions/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "instructions/ji.rs"]
#[allow(non_snake_case)]
pub mod JI;

#[path = "instructions/jmp.rs"]
#[allow(non_snake_case)]
pub mod JMP;

#[path = "instructions/pop.rs"]
#[allow(non_snake_case)]
pub mod POP;

#[path = "instructions/push.rs"]
#[allow(non_snake_case)]
pub mod PUSH;

#[path = "instructions/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "instructions/vector.rs"]
#[allow(non_snake_case)]
pub mod VECTOR;

#[path = "instructions/write.rs"]
#[allow(non_snake_case)]
pub mod WRITE;
