pub mod ast;
pub mod check;
pub mod codegen;
pub mod driver;
pub mod session;
