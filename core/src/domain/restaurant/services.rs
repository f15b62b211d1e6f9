use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    notification::ports::EmailSender,
    reservation::ports::ReservationRepository,
    restaurant::{
        entities::{Restaurant, RestaurantConfig, RestaurantReview},
        ports::{RestaurantImporter, RestaurantRepository, RestaurantService},
        tag_seeder::{MAX_TAGGED_RESTAURANTS, assign_tags, seeded_rng},
        value_objects::{CreateReviewInput, ImportSummary, RestaurantFilter},
    },
    user::ports::UserRepository,
};

impl<R, U, RV, F, M, I, HC> RestaurantService for Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    async fn list_restaurants(
        &self,
        filter: RestaurantFilter,
    ) -> Result<Vec<Restaurant>, CoreError> {
        self.restaurant_repository.list(filter).await
    }

    async fn get_restaurant(&self, restaurant_id: Uuid) -> Result<Restaurant, CoreError> {
        self.restaurant_repository
            .get_by_id(restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_reviews(&self, restaurant_id: Uuid) -> Result<Vec<RestaurantReview>, CoreError> {
        let restaurant = self.get_restaurant(restaurant_id).await?;

        self.restaurant_repository.list_reviews(restaurant.id).await
    }

    async fn create_review(&self, input: CreateReviewInput) -> Result<RestaurantReview, CoreError> {
        input.validate()?;

        let restaurant = self.get_restaurant(input.restaurant_id).await?;
        let user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let review = RestaurantReview::new(
            restaurant.id,
            user.id,
            input.rating,
            input.title.trim().to_string(),
            input.comment.trim().to_string(),
        );

        self.restaurant_repository.create_review(review).await
    }

    async fn import_restaurants(&self) -> Result<ImportSummary, CoreError> {
        let imported = self.restaurant_importer.fetch_restaurants().await?;
        let mut summary = ImportSummary {
            fetched: imported.len(),
            ..Default::default()
        };

        for candidate in imported {
            let duplicate = self
                .restaurant_repository
                .exists_similar(
                    candidate.name.clone(),
                    candidate.street.clone().unwrap_or_default(),
                    candidate.number.clone().unwrap_or_default(),
                )
                .await?;

            if duplicate {
                summary.skipped += 1;
                continue;
            }

            let restaurant = Restaurant::new(RestaurantConfig::from(candidate));
            self.restaurant_repository
                .create_restaurant(restaurant)
                .await?;
            summary.inserted += 1;
        }

        info!(
            fetched = summary.fetched,
            inserted = summary.inserted,
            skipped = summary.skipped,
            "restaurant import finished"
        );

        Ok(summary)
    }

    async fn seed_restaurant_tags(&self) -> Result<usize, CoreError> {
        let restaurants = self
            .restaurant_repository
            .list_first(MAX_TAGGED_RESTAURANTS)
            .await?;

        let mut rng = seeded_rng();
        let mut updated = 0;

        for mut restaurant in restaurants {
            if !assign_tags(&mut restaurant, &mut rng) {
                continue;
            }

            restaurant.touch();
            self.restaurant_repository
                .update_restaurant(restaurant)
                .await?;
            updated += 1;
        }

        if updated > 0 {
            info!("assigned dietary tags to {} restaurants", updated);
        } else {
            warn!("all restaurants already have dietary tags assigned");
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::services::mocks::MockDependencies,
        menu::value_objects::{Allergen, Cuisine, DietaryType},
        restaurant::value_objects::ImportedRestaurant,
        user::entities::{User, UserConfig, UserProfile},
    };

    fn restaurant(name: &str) -> Restaurant {
        Restaurant::new(RestaurantConfig {
            name: name.to_string(),
            address: "Calea Victoriei 1".to_string(),
            city: "Bucharest".to_string(),
            cuisines: vec![Cuisine::Italian],
            ..Default::default()
        })
    }

    fn imported(name: &str, street: Option<&str>, number: Option<&str>) -> ImportedRestaurant {
        ImportedRestaurant {
            name: name.to_string(),
            street: street.map(str::to_string),
            number: number.map(str::to_string),
            address: format!("{} {}", street.unwrap_or("Unknown street"), number.unwrap_or(""))
                .trim()
                .to_string(),
            city: "Bucharest".to_string(),
            phone: None,
            email: None,
            website: None,
            latitude: 44.43,
            longitude: 26.1,
        }
    }

    fn review_input(restaurant_id: Uuid, user_id: Uuid) -> CreateReviewInput {
        CreateReviewInput {
            restaurant_id,
            user_id,
            rating: 4,
            title: "  Cozy  ".to_string(),
            comment: "Friendly staff and great pasta.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_missing_restaurant_is_not_found() {
        let mut deps = MockDependencies::default();
        deps.restaurants
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = deps.into_service().get_restaurant(Uuid::new_v4()).await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_create_review_trims_and_stores() {
        let stored = restaurant("Trattoria");
        let restaurant_id = stored.id;
        let user = User::new(UserConfig {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            birth_year: 1990,
            profile: UserProfile::default(),
        });
        let user_id = user.id;

        let mut deps = MockDependencies::default();
        deps.restaurants.expect_get_by_id().returning(move |_| {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        deps.users.expect_get_by_id().returning(move |_| {
            let user = user.clone();
            Box::pin(async move { Ok(Some(user)) })
        });
        deps.restaurants
            .expect_create_review()
            .times(1)
            .returning(|review| Box::pin(async move { Ok(review) }));

        let review = deps
            .into_service()
            .create_review(review_input(restaurant_id, user_id))
            .await
            .expect("review");
        assert_eq!(review.title, "Cozy");
        assert_eq!(review.restaurant_id, restaurant_id);
        assert_eq!(review.user_id, user_id);
    }

    #[tokio::test]
    async fn test_invalid_review_is_rejected_before_lookup() {
        let mut deps = MockDependencies::default();
        deps.restaurants.expect_get_by_id().never();

        let mut input = review_input(Uuid::new_v4(), Uuid::new_v4());
        input.rating = 7;
        let result = deps.into_service().create_review(input).await;
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_review_from_unknown_user_is_not_found() {
        let stored = restaurant("Trattoria");
        let mut deps = MockDependencies::default();
        deps.restaurants.expect_get_by_id().returning(move |_| {
            let stored = stored.clone();
            Box::pin(async move { Ok(Some(stored)) })
        });
        deps.users
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        deps.restaurants.expect_create_review().never();

        let result = deps
            .into_service()
            .create_review(review_input(Uuid::new_v4(), Uuid::new_v4()))
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_import_skips_known_restaurants() {
        let mut deps = MockDependencies::default();
        deps.importer.expect_fetch_restaurants().returning(|| {
            Box::pin(async {
                Ok(vec![
                    imported("Hanu' lui Manuc", Some("Strada Franceză"), Some("62-64")),
                    imported("La Mama", None, None),
                    imported("Caru' cu bere", Some("Strada Stavropoleos"), Some("5")),
                ])
            })
        });
        deps.restaurants
            .expect_exists_similar()
            .returning(|name, _, _| Box::pin(async move { Ok(name == "La Mama") }));
        deps.restaurants
            .expect_create_restaurant()
            .times(2)
            .returning(|restaurant| Box::pin(async move { Ok(restaurant) }));

        let summary = deps
            .into_service()
            .import_restaurants()
            .await
            .expect("summary");
        assert_eq!(
            summary,
            ImportSummary {
                fetched: 3,
                inserted: 2,
                skipped: 1
            }
        );
    }

    #[tokio::test]
    async fn test_import_failure_is_propagated() {
        let mut deps = MockDependencies::default();
        deps.importer.expect_fetch_restaurants().returning(|| {
            Box::pin(async {
                Err(CoreError::ServiceUnavailable(
                    "map data source timed out".to_string(),
                ))
            })
        });
        deps.restaurants.expect_create_restaurant().never();

        let result = deps.into_service().import_restaurants().await;
        assert!(matches!(result, Err(CoreError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_seeding_updates_only_changed_restaurants() {
        let mut tagged = restaurant("Already tagged");
        tagged.dietary_types.insert(DietaryType::Keto);
        tagged.allergen_free.insert(Allergen::Fish);
        tagged.has_halal_options = true;
        tagged.has_kosher_options = true;
        tagged.has_diabetic_friendly_options = true;
        let untagged = restaurant("Untagged");

        let mut deps = MockDependencies::default();
        deps.restaurants
            .expect_list_first()
            .withf(|limit| *limit == MAX_TAGGED_RESTAURANTS)
            .returning(move |_| {
                let restaurants = vec![tagged.clone(), untagged.clone()];
                Box::pin(async move { Ok(restaurants) })
            });
        deps.restaurants
            .expect_update_restaurant()
            .times(1)
            .withf(|r| r.name == "Untagged" && !r.dietary_types.is_empty())
            .returning(|restaurant| Box::pin(async move { Ok(restaurant) }));

        let updated = deps
            .into_service()
            .seed_restaurant_tags()
            .await
            .expect("seeded");
        assert_eq!(updated, 1);
    }
}
