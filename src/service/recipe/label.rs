use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::label::LabelRepository,
    error::{label::LabelError, Error},
    model::{db::LabelModel, label::normalize_label_name, user::ActingUser},
    service::ownership::{require_owned_recipe, require_recipe},
};

/// Normalizes raw label names and removes duplicates, keeping the first occurrence order.
///
/// # Returns
/// - `Ok(Vec<String>)` - Normalized names, empty when `names` is empty
/// - `Err(LabelError::BlankName)` - One of the names is blank
pub(crate) fn normalize_label_names(names: &[String]) -> Result<Vec<String>, LabelError> {
    let mut normalized: Vec<String> = Vec::with_capacity(names.len());

    for name in names {
        let name = normalize_label_name(name).ok_or(LabelError::BlankName)?;
        if !normalized.contains(&name) {
            normalized.push(name);
        }
    }

    Ok(normalized)
}

/// Service for the labels attached to a recipe.
pub struct LabelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LabelService<'a> {
    /// Creates a new instance of LabelService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches labels to a recipe owned by the acting user.
    ///
    /// Names are normalized before lookup. Labels that do not exist yet are created, and
    /// labels already attached are left as they are.
    ///
    /// # Arguments
    /// - `user` - The acting user, must be the recipe's chef
    /// - `recipe_id` - ID of the recipe
    /// - `names` - Raw label names
    ///
    /// # Returns
    /// - `Ok(Vec<LabelModel>)` - Every label of the recipe after the change, ordered by name
    /// - `Err(Error::LabelError(LabelError::EmptyLabelList))` - No names were given
    /// - `Err(Error::LabelError(LabelError::BlankName))` - A name is blank
    /// - `Err(Error::RecipeError(_))` - Recipe missing or not owned by the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_labels(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        names: &[String],
    ) -> Result<Vec<LabelModel>, Error> {
        let names = normalize_label_names(names)?;
        if names.is_empty() {
            return Err(LabelError::EmptyLabelList.into());
        }

        let txn = self.db.begin().await?;

        require_owned_recipe(&txn, recipe_id, user).await?;

        let label_repo = LabelRepository::new(&txn);
        let labels = label_repo.get_or_create_many(&names).await?;
        let label_ids: Vec<i32> = labels.iter().map(|label| label.id).collect();
        let attached = label_repo.attach(recipe_id, &label_ids).await?;
        let labels = label_repo.find_by_recipe(recipe_id).await?;

        txn.commit().await?;

        tracing::debug!(
            recipe_id = recipe_id,
            attached = attached,
            "Attached labels to recipe"
        );

        Ok(labels)
    }

    /// Detaches one label from a recipe owned by the acting user. The label itself is kept.
    ///
    /// # Returns
    /// - `Ok(())` - The association was removed
    /// - `Err(Error::LabelError(LabelError::NotFound))` - No label with that id
    /// - `Err(Error::LabelError(LabelError::NotAttached))` - The label is not on the recipe
    /// - `Err(Error::RecipeError(_))` - Recipe missing or not owned by the user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_label(
        &self,
        user: &ActingUser,
        recipe_id: i32,
        label_id: i32,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        require_owned_recipe(&txn, recipe_id, user).await?;

        let label_repo = LabelRepository::new(&txn);
        if label_repo.get(label_id).await?.is_none() {
            return Err(LabelError::NotFound(label_id).into());
        }

        let result = label_repo.detach(recipe_id, label_id).await?;
        if result.rows_affected == 0 {
            return Err(LabelError::NotAttached {
                label_id,
                recipe_id,
            }
            .into());
        }

        txn.commit().await?;

        Ok(())
    }

    /// Labels of a recipe ordered by name. Public.
    pub async fn list_labels(&self, recipe_id: i32) -> Result<Vec<LabelModel>, Error> {
        require_recipe(self.db, recipe_id).await?;

        let labels = LabelRepository::new(self.db)
            .find_by_recipe(recipe_id)
            .await?;

        Ok(labels)
    }
}
