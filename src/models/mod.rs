pub mod freelancers;
pub mod projects;
pub mod users;
