use async_graphql::MergedObject;
mod form;
mod recommendations;

#[derive(MergedObject, Default)]
pub struct Queries(recommendations::RecommendationQueries, form::FormQueries);
