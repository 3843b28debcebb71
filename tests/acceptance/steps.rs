use crate::PluginWorld;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use linbar::config::Config;
use linbar::{menu, run};

#[given(regex = r#"^the environment variable (\S+) is "([^"]*)"$"#)]
async fn given_env_var(world: &mut PluginWorld, name: String, value: String) {
    world.env.insert(name, value);
}

#[given("no API key is configured")]
async fn given_no_api_key(world: &mut PluginWorld) {
    world.env.remove("LINEAR_API_KEY");
}

#[given("the API responds with:")]
async fn given_api_response(world: &mut PluginWorld, step: &Step) {
    let body = step
        .docstring
        .as_ref()
        .expect("Expected docstring with the response body");
    world.response = Some(Ok(body.trim().to_string()));
}

#[given(regex = r#"^the request fails with "(.+)"$"#)]
async fn given_request_fails(world: &mut PluginWorld, message: String) {
    world.response = Some(Err(format!("Error: {message}")));
}

#[when("the plugin renders the menu")]
async fn when_plugin_renders(world: &mut PluginWorld) {
    let config = Config::from_lookup(|name| world.env.get(name).cloned());

    world.lines = match config.api_key {
        None => menu::missing_key(),
        Some(_) => run::render_response(
            world
                .response
                .clone()
                .expect("Scenario must stub a response when a key is configured"),
        ),
    };
}

#[then("the menu should be:")]
async fn then_menu_should_be(world: &mut PluginWorld, step: &Step) {
    let expected: Vec<String> = step
        .docstring
        .as_ref()
        .expect("Expected docstring with the menu lines")
        .trim()
        .lines()
        .map(str::to_string)
        .collect();

    assert_eq!(
        world.lines, expected,
        "Expected menu:\n{}\nbut got:\n{}",
        expected.join("\n"),
        world.lines.join("\n")
    );
}

#[then(regex = r#"^the menu should contain the line "(.*)"$"#)]
async fn then_menu_should_contain(world: &mut PluginWorld, expected_line: String) {
    assert!(
        world.lines.iter().any(|line| line == &expected_line),
        "Expected line '{}' in menu:\n{}",
        expected_line,
        world.lines.join("\n")
    );
}
