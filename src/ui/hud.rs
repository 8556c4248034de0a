//! In-game HUD - score, countdown, shopping list, and control hints.

use bevy::prelude::*;

use crate::core::AppState;
use crate::session::{start_session, Session};

/// Countdown turns red below this many seconds.
const LOW_TIME_SECONDS: u32 = 20;

const TEXT_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
const MUTED_COLOR: Color = Color::srgb(0.75, 0.75, 0.75);
const FOUND_COLOR: Color = Color::srgb(0.13, 0.77, 0.37);
const LOW_TIME_COLOR: Color = Color::srgb(1.0, 0.27, 0.27);
const PANEL_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

/// Marker for the score readout.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the countdown readout.
#[derive(Component)]
pub struct TimerText;

/// Marker for the shopping list header ("Shopping List (3/8)").
#[derive(Component)]
pub struct ListHeaderText;

/// One row of the shopping list panel, tied to an item name.
#[derive(Component)]
pub struct ListEntry {
    pub name: String,
}

/// Format seconds as `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(AppState::InGame), spawn_hud.after(start_session))
        .add_systems(OnExit(AppState::InGame), cleanup_hud)
        .add_systems(
            Update,
            (update_score_text, update_timer_text, update_list_entries)
                .run_if(in_state(AppState::InGame))
                .run_if(resource_exists::<Session>),
        );
}

/// Spawn the HUD UI from the session's shopping list.
fn spawn_hud(mut commands: Commands, session: Option<Res<Session>>) {
    let Some(session) = session else {
        return;
    };

    // Top bar: score on the left, countdown on the right
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(15.0)),
                margin: UiRect::all(Val::Px(20.0)),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                ScoreText,
            ));

            parent.spawn((
                Text::new(format_time(session.time_remaining())),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                TimerText,
            ));
        });

    // Shopping list panel
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(100.0),
                left: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(15.0)),
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Shopping List (0/{})", session.shopping_list().len())),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                ListHeaderText,
            ));

            for name in session.shopping_list() {
                parent.spawn((
                    Text::new(format!("   {name}")),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(MUTED_COLOR),
                    ListEntry { name: name.clone() },
                ));
            }
        });

    // Bottom control hints
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(20.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::axes(Val::Px(25.0), Val::Px(12.0)),
                        ..default()
                    },
                    BackgroundColor(PANEL_COLOR),
                ))
                .with_children(|hint| {
                    hint.spawn((
                        Text::new("WASD to move | Mouse to look | Walk into items to collect"),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                    ));
                });
        });
}

/// Keep the score readout current.
fn update_score_text(
    session: Res<Session>,
    mut text_query: Query<&mut Text, With<ScoreText>>,
) {
    if !session.is_changed() {
        return;
    }
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };
    text.0 = format!("Score: {}", session.score());
}

/// Keep the countdown readout current, switching to red when time runs low.
fn update_timer_text(
    session: Res<Session>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<TimerText>>,
) {
    let Ok((mut text, mut color)) = text_query.get_single_mut() else {
        return;
    };
    text.0 = format_time(session.time_remaining());
    color.0 = if session.time_remaining() < LOW_TIME_SECONDS {
        LOW_TIME_COLOR
    } else {
        TEXT_COLOR
    };
}

/// Tick off found items on the list panel.
fn update_list_entries(
    session: Res<Session>,
    mut header_query: Query<&mut Text, With<ListHeaderText>>,
    mut entry_query: Query<(&ListEntry, &mut Text, &mut TextColor), Without<ListHeaderText>>,
) {
    if !session.is_changed() {
        return;
    }

    if let Ok(mut header) = header_query.get_single_mut() {
        header.0 = format!(
            "Shopping List ({}/{})",
            session.found().len(),
            session.shopping_list().len()
        );
    }

    for (entry, mut text, mut color) in entry_query.iter_mut() {
        if session.is_found(&entry.name) {
            text.0 = format!("\u{2713} {}", entry.name);
            color.0 = FOUND_COLOR;
        }
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_formats_as_minutes_and_seconds() {
        assert_eq!(format_time(90), "1:30");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(600), "10:00");
    }
}
