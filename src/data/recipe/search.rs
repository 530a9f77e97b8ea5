//! Composition of optional recipe filters into a single query condition.

use entity::sea_orm_active_enums::Difficulty;
use migration::{Expr, Func, Query};
use sea_orm::{ColumnTrait, Condition, ExprTrait, QueryOrder, Select};

use crate::model::{label::normalize_label_name, recipe::RecipeSort};

/// Independently optional search criteria.
///
/// Absent criteria contribute no restriction; present ones are combined with AND.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeSearch {
    keyword: Option<String>,
    labels: Vec<String>,
    chef_id: Option<i32>,
    difficulty: Option<Difficulty>,
}

impl RecipeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on title or description. Blank keywords are ignored.
    pub fn keyword(mut self, keyword: impl AsRef<str>) -> Self {
        let keyword = keyword.as_ref().trim();
        self.keyword = (!keyword.is_empty()).then(|| keyword.to_lowercase());
        self
    }

    /// Matches recipes carrying at least one of the labels.
    ///
    /// Names are normalized the same way they are stored; blank names are dropped.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in labels
            .into_iter()
            .filter_map(|name| normalize_label_name(name.as_ref()))
        {
            if !self.labels.contains(&name) {
                self.labels.push(name);
            }
        }
        self
    }

    pub fn chef(mut self, chef_id: i32) -> Self {
        self.chef_id = Some(chef_id);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Returns true when no criterion restricts the result set.
    pub fn is_unfiltered(&self) -> bool {
        self.keyword.is_none()
            && self.labels.is_empty()
            && self.chef_id.is_none()
            && self.difficulty.is_none()
    }

    /// Builds the condition for the active criteria.
    ///
    /// The label criterion is a `recipes.id IN (subquery)` predicate rather than a join, so
    /// a recipe matching several labels still appears once.
    pub fn build(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(keyword) = &self.keyword {
            let pattern = format!("%{}%", keyword);

            condition = condition.add(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::recipe::Entity,
                            entity::recipe::Column::Title,
                        ))))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col((
                            entity::recipe::Entity,
                            entity::recipe::Column::Description,
                        ))))
                        .like(pattern),
                    ),
            );
        }

        if !self.labels.is_empty() {
            let labelled_recipes = Query::select()
                .column((
                    entity::recipe_label::Entity,
                    entity::recipe_label::Column::RecipeId,
                ))
                .from(entity::recipe_label::Entity)
                .inner_join(
                    entity::label::Entity,
                    Expr::col((entity::label::Entity, entity::label::Column::Id)).equals((
                        entity::recipe_label::Entity,
                        entity::recipe_label::Column::LabelId,
                    )),
                )
                .and_where(
                    Expr::col((entity::label::Entity, entity::label::Column::Name))
                        .is_in(self.labels.iter().cloned()),
                )
                .to_owned();

            condition = condition.add(entity::recipe::Column::Id.in_subquery(labelled_recipes));
        }

        if let Some(chef_id) = self.chef_id {
            condition = condition.add(entity::recipe::Column::ChefId.eq(chef_id));
        }

        if let Some(difficulty) = self.difficulty {
            condition = condition.add(entity::recipe::Column::Difficulty.eq(difficulty));
        }

        condition
    }
}

/// Orders a recipe query. Descending sorts break ties by descending id, ascending sorts
/// by ascending id.
pub fn apply_sort(
    select: Select<entity::recipe::Entity>,
    sort: RecipeSort,
) -> Select<entity::recipe::Entity> {
    use entity::recipe::Column;

    match sort {
        RecipeSort::Newest => select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id),
        RecipeSort::Oldest => select.order_by_asc(Column::CreatedAt).order_by_asc(Column::Id),
        RecipeSort::TopRated => select
            .order_by_desc(Column::AverageRating)
            .order_by_desc(Column::RatingCount)
            .order_by_desc(Column::Id),
        RecipeSort::MostViewed => select
            .order_by_desc(Column::ViewCount)
            .order_by_desc(Column::Id),
        RecipeSort::MostFavorited => select
            .order_by_desc(Column::FavoritesCount)
            .order_by_desc(Column::Id),
        RecipeSort::Title => select.order_by_asc(Column::Title).order_by_asc(Column::Id),
    }
}
