mod add_labels;

use super::*;

use crate::{
    error::{label::LabelError, recipe::RecipeError, Error},
    service::recipe::label::LabelService,
};

fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
