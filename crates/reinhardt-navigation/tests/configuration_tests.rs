//! Router configuration tests
//!
//! Tests configuring routers from closures, configuration objects and
//! JSON/TOML documents.

use reinhardt_navigation::{
	MemoryHistory, RouteConfig, Router, RouterConfiguration, RouterError, RouterOptions,
};
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn router() -> Router {
	Router::new(Arc::new(MemoryHistory::new()))
}

fn route(router: &Router, pattern: &str) -> Arc<RouteConfig> {
	router
		.routes()
		.into_iter()
		.find(|config| config.route == pattern)
		.unwrap()
}

#[rstest]
#[tokio::test]
async fn test_configure_with_closure(router: Router) {
	// Act
	router
		.configure(|config: &mut RouterConfiguration| {
			config.title("Shop");
			config.map(RouteConfig::new("products").with_module_id("products/list"));
			config.map_unknown_routes("not-found");
		})
		.unwrap()
		.refresh_navigation();

	// Assert
	assert_eq!(router.title().as_deref(), Some("Shop"));
	assert_eq!(router.routes().len(), 1);
	let missing = router
		.create_navigation_instruction("nowhere", None)
		.await
		.unwrap();
	assert_eq!(missing.config().module_id.as_deref(), Some("not-found"));
}

#[rstest]
fn test_configure_with_object(router: Router) {
	// Arrange
	let mut config = RouterConfiguration::new();
	config
		.map_route("users/:id", RouteConfig::default().with_module_id("users/detail"))
		.options(RouterOptions {
			push_state: true,
			..RouterOptions::default()
		});

	// Act
	router.configure(config).unwrap();

	// Assert
	assert!(router.options().push_state);
	assert!(router.options().hash_change);
	assert_eq!(router.routes()[0].route, "users/:id");
}

#[rstest]
fn test_map_routes_shares_menu_entry(router: Router) {
	// Act
	router
		.configure(|config: &mut RouterConfiguration| {
			config.map_routes(
				["", "home"],
				RouteConfig::default().with_module_id("home").with_nav(true),
			);
		})
		.unwrap();

	// Assert
	assert_eq!(router.routes().len(), 2);
	let navigation = router.navigation();
	assert_eq!(navigation.len(), 1);
	assert_eq!(navigation[0].relative_href().as_deref(), Some(""));
	assert_eq!(navigation[0].title().as_deref(), Some("Home"));
}

#[rstest]
#[case("users/:id", None, None, "users", "Users", "users")]
#[case("users/:id", Some("Profile"), None, "Profile", "Profile", "users")]
#[case("files/*path", None, Some("files/browser"), "files", "Files", "files/browser")]
#[case(":slug", None, Some("pages"), "pages", "Pages", "pages")]
fn test_defaults_are_derived(
	router: Router,
	#[case] pattern: &str,
	#[case] title: Option<&str>,
	#[case] module_id: Option<&str>,
	#[case] name: &str,
	#[case] expected_title: &str,
	#[case] expected_module_id: &str,
) {
	// Arrange
	let mut config = RouteConfig::new(pattern);
	config.title = title.map(str::to_string);
	config.module_id = module_id.map(str::to_string);

	// Act
	router
		.configure(|c: &mut RouterConfiguration| {
			c.map(config);
		})
		.unwrap();

	// Assert
	let registered = route(&router, pattern);
	assert_eq!(registered.name.as_deref(), Some(name));
	assert_eq!(registered.title.as_deref(), Some(expected_title));
	assert_eq!(registered.module_id.as_deref(), Some(expected_module_id));
	assert!(router.has_route(name));
}

#[rstest]
fn test_missing_pattern_uses_module_id(router: Router) {
	// Arrange
	let json = r#"{ "routes": [ { "moduleId": "settings" } ] }"#;

	// Act
	router
		.configure(RouterConfiguration::from_json_str(json).unwrap())
		.unwrap();

	// Assert
	let registered = route(&router, "settings");
	assert_eq!(registered.name.as_deref(), Some("settings"));
	assert_eq!(registered.title.as_deref(), Some("Settings"));
}

#[rstest]
#[tokio::test]
async fn test_json_document(router: Router) {
	// Arrange
	let json = r#"{
		"title": "Admin",
		"unknown_route": "errors/404",
		"options": { "push_state": true, "root": "/app/" },
		"routes": [
			{ "route": ["", "dashboard"], "moduleId": "dashboard", "nav": true },
			{ "route": "users/:id", "moduleId": "users/detail", "name": "user" },
			{ "route": "reports", "moduleId": "reports", "nav": 1, "settings": { "auth": true } }
		]
	}"#;

	// Act
	let config = RouterConfiguration::from_json_str(json).unwrap();
	router.configure(config).unwrap();

	// Assert
	assert_eq!(router.title().as_deref(), Some("Admin"));
	assert_eq!(router.options().root, "/app/");
	assert_eq!(router.routes().len(), 4);
	let titles: Vec<String> = router
		.navigation()
		.iter()
		.filter_map(|entry| entry.title())
		.collect();
	assert_eq!(titles, vec!["Reports", "Dashboard"]);
	assert_eq!(
		route(&router, "reports").settings,
		Some(serde_json::json!({ "auth": true }))
	);
	let missing = router
		.create_navigation_instruction("nope", None)
		.await
		.unwrap();
	assert_eq!(missing.config().module_id.as_deref(), Some("errors/404"));
}

#[cfg(feature = "toml-config")]
#[rstest]
#[tokio::test]
async fn test_toml_document(router: Router) {
	// Arrange
	let source = r#"
title = "Admin"

[[routes]]
route = "users/:id"
moduleId = "users/detail"
nav = 2

[[routes]]
route = "groups"
moduleId = "groups"
nav = true

[routes.viewPorts.sidebar]
moduleId = "groups/sidebar"
"#;

	// Act
	let config = RouterConfiguration::from_toml_str(source).unwrap();
	router.configure(config).unwrap();

	// Assert
	assert_eq!(router.routes().len(), 2);
	assert_eq!(
		router
			.navigation()
			.iter()
			.filter_map(|entry| entry.order())
			.collect::<Vec<_>>(),
		vec![2, 101]
	);
	let groups = route(&router, "groups");
	let view_ports: Vec<_> = groups.view_ports().collect();
	assert_eq!(view_ports.len(), 1);
	assert_eq!(view_ports[0].0, "sidebar");
	let instruction = router
		.create_navigation_instruction("users/9", None)
		.await
		.unwrap();
	assert_eq!(instruction.params()["id"], "9");
}

#[rstest]
fn test_malformed_document_is_a_configuration_error() {
	// Act
	let result = RouterConfiguration::from_json_str(r#"{ "routes": 3 }"#);

	// Assert
	assert!(matches!(result, Err(RouterError::Configuration(_))));
}

#[rstest]
fn test_first_failing_route_stops_export(router: Router) {
	// Act
	let result = router.configure(|config: &mut RouterConfiguration| {
		config.map(RouteConfig::new("a").with_module_id("a"));
		config.map(RouteConfig::new("a").with_module_id("again"));
		config.map(RouteConfig::new("b").with_module_id("b"));
	});

	// Assert
	assert_eq!(result.unwrap_err(), RouterError::DuplicateRoute("a".to_string()));
	assert_eq!(router.routes().len(), 1);
}
