use std::path::Path;

use plotters::{
    coord::Shift,
    prelude::*,
    style::{
        FontTransform,
        text_anchor::{HPos, Pos, VPos},
    },
};

use crate::{Res, analysis::Aggregates};

const FONT: &str = "sans-serif";

/// Pixel size of the rendered chart.
pub const CHART_SIZE: (u32, u32) = (2000, 2000);

const YEAR_COLOR: RGBColor = RGBColor(46, 139, 87);
const DECADE_COLOR: RGBColor = RGBColor(135, 206, 235);
const GENRE_PALETTE: (RGBColor, RGBColor) = (RGBColor(68, 1, 84), RGBColor(122, 209, 81));
const ARTIST_PALETTE: (RGBColor, RGBColor) = (RGBColor(28, 16, 68), RGBColor(252, 137, 97));

/// One ranked panel: a caption, its entries and the message shown without data.
struct Ranking<'a> {
    caption: String,
    entries: &'a [(String, usize)],
    empty_message: &'a str,
    palette: (RGBColor, RGBColor),
}

/// Renders the four-panel analysis chart as an SVG file.
///
/// Panels from top to bottom: songs per release year over the full observed
/// range, songs per decade, the top genres and the top artists. `top` limits
/// the two ranking panels.
pub fn render_chart(path: &Path, total_songs: usize, aggregates: &Aggregates, top: usize) -> Res<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(&root, total_songs, aggregates, top)?;
    root.present()?;
    Ok(())
}

pub fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    total_songs: usize,
    aggregates: &Aggregates,
    top: usize,
) -> Res<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let body = root.titled(
        &format!("Spotify Playlist Analysis (Total Songs: {})", total_songs),
        (FONT, 48).into_font(),
    )?;
    let panels = body.split_evenly((4, 1));

    draw_years(&panels[0], &aggregates.year_range())?;
    draw_decades(
        &panels[1],
        &aggregates.decades.iter().map(|(d, c)| (*d, *c)).collect::<Vec<_>>(),
    )?;

    let genres = aggregates.genres.most_common(top);
    draw_ranking(
        &panels[2],
        &Ranking {
            caption: format!("Top {} Genres", top),
            entries: &genres,
            empty_message: "No Genre Data Available",
            palette: GENRE_PALETTE,
        },
    )?;

    let artists = aggregates.artists.most_common(top);
    draw_ranking(
        &panels[3],
        &Ranking {
            caption: format!("Top {} Artists", top),
            entries: &artists,
            empty_message: "No Artist Data Available",
            palette: ARTIST_PALETTE,
        },
    )?;

    Ok(())
}

fn draw_years<DB>(area: &DrawingArea<DB, Shift>, years: &[(i32, usize)]) -> Res<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let caption = "Songs by Release Year";
    let (Some(first), Some(last)) = (years.first(), years.last()) else {
        return placeholder(area, caption, "No Year Data Available");
    };

    let mut chart = ChartBuilder::on(area)
        .caption(caption, (FONT, 28).into_font())
        .margin(12)
        .x_label_area_size(70)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (first.0 as f64 - 0.5)..(last.0 as f64 + 0.5),
            0u32..max_count(years) + 1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(years.len())
        .x_label_formatter(&|v: &f64| {
            if (v - v.round()).abs() < 1e-6 {
                format!("{:.0}", v)
            } else {
                String::new()
            }
        })
        .x_label_style((FONT, 14).into_font().transform(FontTransform::Rotate90))
        .x_desc("Year")
        .y_desc("Count")
        .axis_desc_style((FONT, 18).into_font())
        .draw()?;

    chart.draw_series(years.iter().map(|(year, count)| {
        let x = *year as f64;
        Rectangle::new([(x - 0.45, 0), (x + 0.45, *count as u32)], YEAR_COLOR.filled())
    }))?;

    Ok(())
}

fn draw_decades<DB>(area: &DrawingArea<DB, Shift>, decades: &[(i32, usize)]) -> Res<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let caption = "Songs by Decade";
    if decades.is_empty() {
        return placeholder(area, caption, "No Decade Data Available");
    }

    let label = |v: &f64| category(*v, decades.len())
        .map(|i| decades[i].0.to_string())
        .unwrap_or_default();

    let mut chart = ChartBuilder::on(area)
        .caption(caption, (FONT, 28).into_font())
        .margin(12)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(
            -0.5..(decades.len() as f64 - 0.5),
            0u32..max_count(decades) + 1,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(decades.len())
        .x_label_formatter(&label)
        .x_desc("Decade")
        .y_desc("Count")
        .axis_desc_style((FONT, 18).into_font())
        .draw()?;

    chart.draw_series(decades.iter().enumerate().map(|(i, (_, count))| {
        let x = i as f64;
        Rectangle::new([(x - 0.4, 0), (x + 0.4, *count as u32)], DECADE_COLOR.filled())
    }))?;

    Ok(())
}

fn draw_ranking<DB>(area: &DrawingArea<DB, Shift>, ranking: &Ranking<'_>) -> Res<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let entries = ranking.entries;
    if entries.is_empty() {
        return placeholder(area, &ranking.caption, ranking.empty_message);
    }

    // rank 0 is drawn at the top
    let n = entries.len();
    let row = |rank: usize| (n - 1 - rank) as f64;
    let label = |v: &f64| category(*v, n)
        .map(|i| entries[n - 1 - i].0.clone())
        .unwrap_or_default();

    let mut chart = ChartBuilder::on(area)
        .caption(&ranking.caption, (FONT, 28).into_font())
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(260)
        .build_cartesian_2d(0u32..max_count(entries) + 1, -0.5..(n as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&label)
        .x_desc("Count")
        .axis_desc_style((FONT, 18).into_font())
        .draw()?;

    chart.draw_series(entries.iter().enumerate().map(|(rank, (_, count))| {
        let y = row(rank);
        let color = gradient(ranking.palette, rank, n);
        Rectangle::new([(0, y - 0.4), (*count as u32, y + 0.4)], color.filled())
    }))?;

    Ok(())
}

fn placeholder<DB>(area: &DrawingArea<DB, Shift>, caption: &str, message: &str) -> Res<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (w, h) = area.dim_in_pixel();
    let title = TextStyle::from((FONT, 28).into_font()).pos(Pos::new(HPos::Center, VPos::Top));
    area.draw_text(caption, &title, (w as i32 / 2, 12))?;

    let body = TextStyle::from((FONT, 24).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
    area.draw_text(message, &body, (w as i32 / 2, h as i32 / 2))?;
    Ok(())
}

fn max_count<K>(entries: &[(K, usize)]) -> u32 {
    entries.iter().map(|(_, c)| *c).max().unwrap_or(0) as u32
}

/// Maps an axis position back to a category index when it sits on one.
fn category(v: f64, len: usize) -> Option<usize> {
    let rounded = v.round();
    if (v - rounded).abs() > 1e-6 || rounded < 0.0 || rounded as usize >= len {
        return None;
    }
    Some(rounded as usize)
}

fn gradient((from, to): (RGBColor, RGBColor), index: usize, len: usize) -> RGBColor {
    let t = if len > 1 {
        index as f64 / (len - 1) as f64
    } else {
        0.0
    };
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}
