pub mod customers;
pub mod dashboard;
pub mod inquiries;
pub mod orders;
pub mod products;
pub mod users;
