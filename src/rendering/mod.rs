use macroquad::prelude::*;

use crate::application::{Cadence, Simulation};
use crate::domain::{Grid, Statistics};

pub const CHART_HEIGHT: f32 = 180.0;
const PADDING: f32 = 12.0;

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const POPULATION_COLOR: Color = Color::new(0.3, 0.55, 1.0, 1.0);
const ENTROPY_COLOR: Color = Color::new(1.0, 0.3, 0.3, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Region above the statistics chart
pub fn grid_area() -> Rect {
    Rect::new(0.0, 0.0, screen_width(), (screen_height() - CHART_HEIGHT).max(0.0))
}

pub fn chart_area() -> Rect {
    Rect::new(0.0, screen_height() - CHART_HEIGHT, screen_width(), CHART_HEIGHT)
}

/// Draw the grid scaled to fit `area`, keeping cells square
pub fn draw_grid(grid: &Grid, area: Rect) {
    let (width, height) = grid.dimensions();
    if grid.is_empty() {
        return;
    }

    let cell = (area.w / width as f32).min(area.h / height as f32);
    let origin_x = area.x + (area.w - cell * width as f32) / 2.0;
    let origin_y = area.y + (area.h - cell * height as f32) / 2.0;

    draw_rectangle(origin_x, origin_y, cell * width as f32, cell * height as f32, DEAD_COLOR);

    grid.iter_cells()
        .filter(|(_, _, c)| c.is_alive())
        .for_each(|(x, y, _)| {
            draw_rectangle(
                origin_x + x as f32 * cell,
                origin_y + y as f32 * cell,
                cell,
                cell,
                ALIVE_COLOR,
            );
        });
}

fn draw_polyline(points: &[(f32, f32)], color: Color) {
    points
        .windows(2)
        .for_each(|pair| draw_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1, 1.5, color));
}

/// Population (left scale) and entropy (right scale, 0..1 bits) over time
pub fn draw_stats_chart(stats: &Statistics, area: Rect) {
    draw_rectangle(area.x, area.y, area.w, area.h, PANEL_COLOR);

    let plot = Rect::new(
        area.x + PADDING,
        area.y + PADDING * 2.0,
        area.w - PADDING * 2.0,
        area.h - PADDING * 3.0,
    );

    let Some(latest) = stats.latest() else {
        draw_text("No generations yet", plot.x, plot.y, 16.0, GRAY);
        return;
    };

    let last_index = (stats.len() - 1).max(1) as f32;
    let peak = stats.peak_population().unwrap_or(0).max(1) as f32;
    let x_at = |i: usize| plot.x + i as f32 / last_index * plot.w;

    let population: Vec<(f32, f32)> = stats
        .population_history()
        .iter()
        .enumerate()
        .map(|(i, &p)| (x_at(i), plot.bottom() - p as f32 / peak * plot.h))
        .collect();
    let entropy: Vec<(f32, f32)> = stats
        .entropy_history()
        .iter()
        .enumerate()
        .map(|(i, &e)| (x_at(i), plot.bottom() - e as f32 * plot.h))
        .collect();

    draw_polyline(&population, POPULATION_COLOR);
    draw_polyline(&entropy, ENTROPY_COLOR);

    draw_text(
        &format!("Live Cells: {}", format_number(latest.population)),
        plot.x,
        area.y + PADDING + 4.0,
        16.0,
        POPULATION_COLOR,
    );
    draw_text(
        &format!("Shannon Entropy: {:.2}", latest.entropy),
        plot.right() - 180.0,
        area.y + PADDING + 4.0,
        16.0,
        ENTROPY_COLOR,
    );
}

/// One-line status overlay in the top-left corner
pub fn draw_status(sim: &Simulation, cadence: &Cadence) {
    let status = if cadence.is_paused() { "Paused" } else { sim.state().name() };
    let text = format!(
        "Rule {} | k={} | Gen {} | {} | {}ms | Space: pause  Up/Down: speed  R: reseed  Esc: quit",
        sim.rule(),
        sim.kernel().size(),
        sim.generation(),
        status,
        cadence.interval_ms(),
    );
    draw_rectangle(0.0, 0.0, screen_width(), 22.0, Color::new(0.0, 0.0, 0.0, 0.6));
    draw_text(&text, 6.0, 16.0, 16.0, WHITE);
}
