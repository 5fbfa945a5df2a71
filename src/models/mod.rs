pub mod salary;
pub mod vacancy;
