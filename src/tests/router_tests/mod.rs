mod card_tests;
mod nearby_tests;
mod services_tests;
