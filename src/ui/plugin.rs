//! UI plugin - main menu and run summary screen.

use bevy::prelude::*;

use super::hud;
use crate::core::AppState;
use crate::session::{Session, SessionPhase};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Main menu
            .add_systems(OnEnter(AppState::MainMenu), setup_main_menu)
            .add_systems(Update, main_menu_input.run_if(in_state(AppState::MainMenu)))
            .add_systems(OnExit(AppState::MainMenu), cleanup_main_menu)

            // Summary screen
            .add_systems(OnEnter(AppState::Summary), setup_summary)
            .add_systems(Update, summary_input.run_if(in_state(AppState::Summary)))
            .add_systems(OnExit(AppState::Summary), cleanup_summary);
    }
}

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for the menu camera (used when no game camera exists).
#[derive(Component)]
struct MenuCamera;

/// Marker for summary screen UI entities.
#[derive(Component)]
struct SummaryUi;

/// Marker for menu buttons.
#[derive(Component)]
enum MenuButton {
    StartShopping,
    Quit,
    PlayAgain,
    MainMenu,
}

/// Set up the main menu.
fn setup_main_menu(mut commands: Commands) {
    // Spawn a camera for UI rendering in menu state
    commands.spawn((Camera2d, MenuCamera));

    // Root container
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.25, 0.32, 0.55)),
            MainMenuUi,
        ))
        .with_children(|parent| {
            // Title
            parent.spawn((
                Text::new("GROCERY DASH"),
                TextFont {
                    font_size: 80.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.98)),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            // Subtitle
            parent.spawn((
                Text::new("Grab everything on the list before time runs out"),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.75, 0.78, 0.88)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            // Start button
            spawn_menu_button(parent, "Start Shopping", MenuButton::StartShopping);

            // Quit button
            spawn_menu_button(parent, "Quit", MenuButton::Quit);
        });
}

/// Helper to spawn a menu button.
fn spawn_menu_button(parent: &mut ChildBuilder, text: &str, button: MenuButton) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(240.0),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(10.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.15, 0.15, 0.2)),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.92)),
            ));
        });
}

/// Handle main menu button interactions.
fn main_menu_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = Color::srgb(0.3, 0.3, 0.35).into();
                match button {
                    MenuButton::StartShopping => {
                        next_state.set(AppState::InGame);
                    }
                    MenuButton::Quit => {
                        exit.send(AppExit::Success);
                    }
                    _ => {}
                }
            }
            Interaction::Hovered => {
                *bg_color = Color::srgb(0.25, 0.25, 0.3).into();
            }
            Interaction::None => {
                *bg_color = Color::srgb(0.15, 0.15, 0.2).into();
            }
        }
    }
}

/// Clean up main menu entities.
fn cleanup_main_menu(
    mut commands: Commands,
    ui_query: Query<Entity, With<MainMenuUi>>,
    camera_query: Query<Entity, With<MenuCamera>>,
) {
    for entity in ui_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in camera_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Set up the win/lose summary screen from the finished session.
fn setup_summary(mut commands: Commands, session: Option<Res<Session>>) {
    // Spawn a camera for UI rendering
    commands.spawn((Camera2d, MenuCamera));

    let (won, score, found, total) = match session {
        Some(session) => (
            session.phase() == SessionPhase::Won,
            session.score(),
            session.found().len(),
            session.shopping_list().len(),
        ),
        None => (false, 0, 0, 0),
    };

    let (headline, headline_color, subtitle) = if won {
        (
            "Congratulations!",
            Color::srgb(0.13, 0.77, 0.37),
            "You found all items!",
        )
    } else {
        (
            "Time's Up!",
            Color::srgb(0.94, 0.27, 0.27),
            "Better luck next time!",
        )
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.25, 0.32, 0.55)),
            SummaryUi,
        ))
        .with_children(|parent| {
            // Headline
            parent.spawn((
                Text::new(headline),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(headline_color),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(subtitle),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.82, 0.9)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            // Final tallies
            parent.spawn((
                Text::new(format!("Score: {score}")),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(0.98, 0.75, 0.14)),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("Items Found: {found}/{total}")),
                TextFont {
                    font_size: 26.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.92)),
                Node {
                    margin: UiRect::bottom(Val::Px(50.0)),
                    ..default()
                },
            ));

            // Play Again button
            spawn_menu_button(parent, "Play Again", MenuButton::PlayAgain);

            // Main Menu button
            spawn_menu_button(parent, "Main Menu", MenuButton::MainMenu);
        });
}

/// Handle summary screen button interactions.
fn summary_input(
    mut interaction_query: Query<
        (&Interaction, &MenuButton, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
    mut next_state: ResMut<NextState<AppState>>,
) {
    for (interaction, button, mut bg_color) in interaction_query.iter_mut() {
        match interaction {
            Interaction::Pressed => {
                *bg_color = Color::srgb(0.3, 0.3, 0.35).into();
                match button {
                    MenuButton::PlayAgain => {
                        next_state.set(AppState::InGame);
                    }
                    MenuButton::MainMenu => {
                        next_state.set(AppState::MainMenu);
                    }
                    _ => {}
                }
            }
            Interaction::Hovered => {
                *bg_color = Color::srgb(0.25, 0.25, 0.3).into();
            }
            Interaction::None => {
                *bg_color = Color::srgb(0.15, 0.15, 0.2).into();
            }
        }
    }
}

/// Clean up summary screen entities.
fn cleanup_summary(
    mut commands: Commands,
    ui_query: Query<Entity, With<SummaryUi>>,
    camera_query: Query<Entity, With<MenuCamera>>,
) {
    for entity in ui_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
    for entity in camera_query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
