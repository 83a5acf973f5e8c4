//! Property names used in the three Notion databases.

/// Server-assigned unique numeric id, present in every database.
pub const ID: &str = "ID";

pub mod user {
    pub const EMAIL: &str = "Email";
    pub const FULL_NAME: &str = "Full Name";
    pub const PASSWORD: &str = "Password";
    pub const ROLE: &str = "Role";
    pub const PHONE_NUMBER: &str = "Phone Number";
    pub const PROFILE: &str = "Profile";
    pub const CREATED_AT: &str = "Created At";
    pub const FREELANCER_PROFILE: &str = "Freelancer Profile";
}

pub mod freelancer {
    /// Read side. The write side links the user through [`USER`] instead.
    pub const USER_ID: &str = "User ID";
    pub const USER: &str = "User";
    pub const TITLE: &str = "Title";
    pub const SKILLS: &str = "Skills";
    pub const RATING: &str = "Rating";
    pub const TOTAL_PROJECTS: &str = "Total Projects";
    pub const LINKEDIN: &str = "Linkedin";
    pub const PROJECTS: &str = "Projects";
}

pub mod project {
    pub const TITLE: &str = "Title";
    pub const BUDGET: &str = "Budget";
    pub const REVIEW_SCORE: &str = "Review Score";
    pub const TIMELINE: &str = "Timeline";
    pub const STATUS: &str = "Status";
    pub const CLIENT: &str = "Client";
    pub const FREELANCERS: &str = "Freelancers";
}
