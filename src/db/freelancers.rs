use sea_orm::*;

use crate::models::freelancers::{self, SaveFreelancer, Skills};

/// Fetch the freelancer profile owned by a user.
pub async fn get_freelancer_by_user_id(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<Option<freelancers::Model>, DbErr> {
    freelancers::Entity::find_by_id(user_id).one(db).await
}

/// Insert a freelancer profile, or overwrite every column of the existing
/// profile for the same user.
pub async fn save_freelancer(
    db: &DatabaseConnection,
    input: SaveFreelancer,
) -> Result<freelancers::Model, DbErr> {
    let existing = get_freelancer_by_user_id(db, input.user_id).await?;
    let overwrite = existing.is_some();

    let mut active: freelancers::ActiveModel = match existing {
        Some(profile) => profile.into(),
        None => freelancers::ActiveModel {
            user_id: Set(input.user_id),
            ..Default::default()
        },
    };

    active.title = Set(input.title);
    active.hourly_rate = Set(input.hourly_rate);
    active.exp_years = Set(input.exp_years);
    active.rating = Set(input.rating.unwrap_or(0.0));
    active.total_projects = Set(input.total_projects.unwrap_or(0));
    active.skills = Set(Skills(input.skills));
    active.linkedin_url = Set(input.linkedin_url);

    if overwrite {
        active.update(db).await
    } else {
        active.insert(db).await
    }
}
