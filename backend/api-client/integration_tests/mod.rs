mod errors;
mod helpers;
mod households;
mod mutations;
mod valid_ingredients;
