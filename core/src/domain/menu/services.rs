use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    favorite::ports::FavoriteRepository,
    health::ports::HealthCheckRepository,
    menu::{
        assembler::{assemble_candidate_pool, cuisine_pool},
        catalog::Catalog,
        entities::{Dish, PersonalizedMenu},
        organizer::organize,
        personalization::filter_and_personalize,
        ports::MenuService,
        value_objects::{
            Cuisine, GenerateCuisineMenuInput, GenerateRestaurantMenuInput,
            RestaurantCapabilities,
        },
    },
    notification::ports::EmailSender,
    reservation::ports::ReservationRepository,
    restaurant::ports::{RestaurantImporter, RestaurantRepository},
    user::{
        entities::{User, UserProfile},
        ports::UserRepository,
    },
};

/// Assemble, filter and organize the menu of a restaurant.
pub fn compose_restaurant_menu(
    catalog: &Catalog,
    capabilities: &RestaurantCapabilities,
    user: Option<&UserProfile>,
) -> PersonalizedMenu {
    let primary_cuisine = capabilities.primary_cuisine();
    let pool = assemble_candidate_pool(catalog, capabilities);

    finish(catalog, primary_cuisine, &pool, user)
}

/// Same pipeline over the cuisine menu and common items only.
pub fn compose_cuisine_menu(
    catalog: &Catalog,
    cuisines: &[Cuisine],
    user: Option<&UserProfile>,
) -> PersonalizedMenu {
    let primary_cuisine = cuisines.first().copied();
    let pool = cuisine_pool(catalog, primary_cuisine);

    finish(catalog, primary_cuisine, &pool, user)
}

fn finish(
    catalog: &Catalog,
    primary_cuisine: Option<Cuisine>,
    pool: &[&Dish],
    user: Option<&UserProfile>,
) -> PersonalizedMenu {
    let kept = filter_and_personalize(pool, user);
    let dishes = organize(&kept, catalog, primary_cuisine);

    debug!(
        pool = pool.len(),
        kept = kept.len(),
        served = dishes.len(),
        personalized = user.is_some(),
        "menu generated"
    );

    let primary_cuisine = primary_cuisine.filter(|c| catalog.curated_menu(*c).is_some());
    PersonalizedMenu::new(primary_cuisine, user.is_some(), dishes)
}

impl<R, U, RV, F, M, I, HC> Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    pub(crate) async fn load_optional_user(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<Option<User>, CoreError> {
        match user_id {
            Some(user_id) => self
                .user_repository
                .get_by_id(user_id)
                .await?
                .ok_or(CoreError::NotFound)
                .map(Some),
            None => Ok(None),
        }
    }
}

impl<R, U, RV, F, M, I, HC> MenuService for Service<R, U, RV, F, M, I, HC>
where
    R: RestaurantRepository,
    U: UserRepository,
    RV: ReservationRepository,
    F: FavoriteRepository,
    M: EmailSender,
    I: RestaurantImporter,
    HC: HealthCheckRepository,
{
    async fn generate_menu_for_restaurant(
        &self,
        input: GenerateRestaurantMenuInput,
    ) -> Result<PersonalizedMenu, CoreError> {
        let restaurant = self
            .restaurant_repository
            .get_by_id(input.restaurant_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let user = self.load_optional_user(input.user_id).await?;
        let capabilities = RestaurantCapabilities::from(&restaurant);

        Ok(compose_restaurant_menu(
            self.catalog,
            &capabilities,
            user.as_ref().map(|u| &u.profile),
        ))
    }

    async fn generate_menu_for_user(
        &self,
        input: GenerateCuisineMenuInput,
    ) -> Result<PersonalizedMenu, CoreError> {
        let user = self.load_optional_user(input.user_id).await?;

        Ok(compose_cuisine_menu(
            self.catalog,
            &input.cuisines,
            user.as_ref().map(|u| &u.profile),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::{
        common::services::mocks::MockDependencies,
        menu::{
            organizer::MAX_PER_CATEGORY,
            value_objects::{Allergen, DietaryType, MenuCategory},
        },
        restaurant::entities::{Restaurant, RestaurantConfig},
        user::entities::UserConfig,
    };

    fn italian_vegetarian() -> RestaurantCapabilities {
        RestaurantCapabilities {
            cuisines: vec![Cuisine::Italian],
            has_vegetarian_options: true,
            ..Default::default()
        }
    }

    fn count_in(menu: &PersonalizedMenu, category: MenuCategory) -> usize {
        menu.dishes_in(category).count()
    }

    #[test]
    fn test_anonymous_italian_vegetarian_restaurant() {
        let catalog = Catalog::global();
        let pool = assemble_candidate_pool(catalog, &italian_vegetarian());
        assert!(pool.iter().any(|d| d.name == "Spaghetti Carbonara"));
        assert!(pool.iter().any(|d| d.name == "Quinoa Stuffed Peppers"));

        let menu = compose_restaurant_menu(catalog, &italian_vegetarian(), None);
        assert!(!menu.personalized);
        assert_eq!(menu.primary_cuisine, Some(Cuisine::Italian));
        assert!(count_in(&menu, MenuCategory::MainCourse) > 0);
        assert!(menu.dishes.iter().any(|d| d.name == "Spaghetti Carbonara"));
        for section in menu.sections() {
            assert!(section.dishes.len() <= MAX_PER_CATEGORY);
        }
    }

    #[test]
    fn test_diabetic_users_only_get_diabetic_friendly_main_courses() {
        let catalog = Catalog::global();
        let user = UserProfile {
            has_diabetes: true,
            ..Default::default()
        };

        for cuisine in [Cuisine::Italian, Cuisine::Romanian, Cuisine::Korean] {
            let capabilities = RestaurantCapabilities {
                cuisines: vec![cuisine],
                ..Default::default()
            };
            let menu = compose_restaurant_menu(catalog, &capabilities, Some(&user));
            let fallback = catalog.fallback_main_courses();
            assert!(
                menu.dishes_in(MenuCategory::MainCourse)
                    .all(|d| d.is_diabetic_friendly || fallback.iter().any(|f| f.name == d.name))
            );
        }
    }

    #[test]
    fn test_strict_profile_falls_back_to_default_main_courses() {
        let catalog = Catalog::global();
        let user = UserProfile {
            allergies: BTreeSet::from([Allergen::Mustard]),
            ..Default::default()
        };

        let menu = compose_restaurant_menu(catalog, &italian_vegetarian(), Some(&user));
        let mains: Vec<&str> = menu
            .dishes_in(MenuCategory::MainCourse)
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(mains, vec!["Grilled Chicken Breast", "Vegetable Stir Fry"]);
        assert_eq!(menu.dishes.len(), 2);
    }

    #[test]
    fn test_vegan_label_hides_non_vegan_dishes() {
        let catalog = Catalog::global();
        let user = UserProfile {
            dietary_restrictions: vec!["Vegan".to_string()],
            dietary_type: Some(DietaryType::Vegan),
            ..Default::default()
        };

        let menu = compose_cuisine_menu(catalog, &[Cuisine::Indian], Some(&user));
        assert!(menu.personalized);
        let fallback = catalog.fallback_main_courses();
        assert!(
            menu.dishes
                .iter()
                .all(|d| d.is_vegan || fallback.iter().any(|f| f.name == d.name))
        );
    }

    #[test]
    fn test_cuisine_menu_ignores_capability_dishes() {
        let catalog = Catalog::global();
        let menu = compose_cuisine_menu(catalog, &[], None);
        assert_eq!(menu.primary_cuisine, None);
        assert!(menu.dishes.iter().all(|d| d.name != "Quinoa Stuffed Peppers"));
    }

    #[test]
    fn test_generation_is_repeatable() {
        let catalog = Catalog::global();
        let user = UserProfile {
            is_gluten_free: true,
            ..Default::default()
        };
        assert_eq!(
            compose_restaurant_menu(catalog, &italian_vegetarian(), Some(&user)),
            compose_restaurant_menu(catalog, &italian_vegetarian(), Some(&user))
        );
    }

    fn stored_restaurant() -> Restaurant {
        Restaurant::new(RestaurantConfig {
            name: "Trattoria".to_string(),
            address: "Strada Lipscani 10".to_string(),
            city: "Bucharest".to_string(),
            cuisines: vec![Cuisine::Italian],
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_unknown_restaurant_is_not_found() {
        let mut deps = MockDependencies::default();
        deps.restaurants
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = deps.into_service();

        let result = service
            .generate_menu_for_restaurant(GenerateRestaurantMenuInput {
                restaurant_id: Uuid::new_v4(),
                user_id: None,
            })
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let restaurant = stored_restaurant();
        let mut deps = MockDependencies::default();
        deps.restaurants.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
        deps.users
            .expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));
        let service = deps.into_service();

        let result = service
            .generate_menu_for_restaurant(GenerateRestaurantMenuInput {
                restaurant_id: Uuid::new_v4(),
                user_id: Some(Uuid::new_v4()),
            })
            .await;
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_menu_for_stored_user_is_personalized() {
        let restaurant = stored_restaurant();
        let user = User::new(UserConfig {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            birth_year: 1990,
            profile: UserProfile {
                is_gluten_free: true,
                ..Default::default()
            },
        });
        let user_id = user.id;

        let mut deps = MockDependencies::default();
        deps.restaurants.expect_get_by_id().returning(move |_| {
            let restaurant = restaurant.clone();
            Box::pin(async move { Ok(Some(restaurant)) })
        });
        deps.users
            .expect_get_by_id()
            .withf(move |id| *id == user_id)
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });
        let service = deps.into_service();

        let menu = service
            .generate_menu_for_restaurant(GenerateRestaurantMenuInput {
                restaurant_id: Uuid::new_v4(),
                user_id: Some(user_id),
            })
            .await
            .expect("menu");
        assert!(menu.personalized);
        assert!(menu.dishes.iter().all(|d| d.is_gluten_free));
    }
}
