pub mod dashboard;
pub mod diseases;
pub mod patients;
pub mod prescriptions;
pub mod records;
