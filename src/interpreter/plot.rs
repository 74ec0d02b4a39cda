use std::{cmp::Ordering, f64::consts::FRAC_PI_2};

use ordered_float::OrderedFloat;

use crate::{
    error::SemanticError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{expect_list, expect_number, expect_string_literal},
        },
        value::expression::Expression,
    },
    util::num::format_significant,
};

/// Width and height of the plot frame in scene units.
pub const BOX_SIZE: f64 = 20.0;
/// Number of intervals a continuous plot is sampled over.
pub const CURVE_SAMPLES: u32 = 50;
/// Maximum number of bends refined by extra samples in a continuous plot.
pub const MAX_SMOOTHING: usize = 10;

const POINT_SIZE: f64 = 0.5;
const CURVE_THICKNESS: f64 = 0.5;
const FRAME_THICKNESS: f64 = 0.0;
const LABEL_OFFSET: f64 = 3.0;
const TICK_OFFSET: f64 = 2.0;
const TICK_DIGITS: usize = 2;
const MIN_BEND_DEGREES: f64 = 5.0;
const MAX_BEND_DEGREES: f64 = 175.0;

/// Builds a point glyph: `(list x y)` tagged with `object-name "point"` and a
/// `size`.
///
/// # Example
/// ```
/// use plotscript::interpreter::{plot::make_point, value::expression::Expression};
///
/// let p = make_point(1.0, 2.0, 0.5);
/// assert_eq!(p, Expression::list(vec![1.0.into(), 2.0.into()]));
/// assert_eq!(p.property("object-name"), Some(&Expression::string_literal("point")));
/// assert_eq!(p.property("size"), Some(&Expression::from(0.5)));
/// ```
#[must_use]
pub fn make_point(x: f64, y: f64, size: f64) -> Expression {
    Expression::list(vec![x.into(), y.into()])
        .with_property("object-name", Expression::string_literal("point"))
        .with_property("size", size.into())
}

/// Builds a line glyph: `(list p1 p2)` tagged with `object-name "line"` and a
/// `thickness`.
#[must_use]
pub fn make_line(from: (f64, f64), to: (f64, f64), thickness: f64) -> Expression {
    let endpoint = |(x, y): (f64, f64)| Expression::list(vec![x.into(), y.into()]);

    Expression::list(vec![endpoint(from), endpoint(to)])
        .with_property("object-name", Expression::string_literal("line"))
        .with_property("thickness", thickness.into())
}

/// Builds a text glyph: a string literal tagged with `object-name "text"`,
/// its `position` (a point), `text-scale` and `text-rotation` in radians.
#[must_use]
pub fn make_text(text: &str, position: (f64, f64), scale: f64, rotation: f64) -> Expression {
    Expression::string_literal(text)
        .with_property("object-name", Expression::string_literal("text"))
        .with_property("position", make_point(position.0, position.1, 0.0))
        .with_property("text-scale", scale.into())
        .with_property("text-rotation", rotation.into())
}

/// Labels and scaling read from a plot's option list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub title:          Option<String>,
    pub abscissa_label: Option<String>,
    pub ordinate_label: Option<String>,
    pub text_scale:     f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self { title:          None,
               abscissa_label: None,
               ordinate_label: None,
               text_scale:     1.0, }
    }
}

impl PlotOptions {
    /// Reads a list of `(list "name" value)` pairs.
    ///
    /// Recognized names are `title`, `abscissa-label`, `ordinate-label`
    /// (string literals) and `text-scale` (a number). Other names are
    /// ignored.
    ///
    /// # Errors
    /// A fault naming `form` if the options are not a list of pairs or a
    /// recognized option has a value of the wrong kind.
    ///
    /// # Example
    /// ```
    /// use plotscript::interpreter::{plot::PlotOptions, value::expression::Expression};
    ///
    /// let options =
    ///     Expression::list(vec![Expression::list(vec![Expression::string_literal("title"),
    ///                                                  Expression::string_literal("Data")]),
    ///                           Expression::list(vec![Expression::string_literal("text-scale"),
    ///                                                  2.0.into()])]);
    ///
    /// let parsed = PlotOptions::from_list(&options, "discrete-plot").unwrap();
    /// assert_eq!(parsed.title.as_deref(), Some("Data"));
    /// assert_eq!(parsed.text_scale, 2.0);
    /// ```
    pub fn from_list(options: &Expression, form: &str) -> EvalResult<Self> {
        let mut parsed = Self::default();

        for entry in expect_list(options, form)? {
            let [name, value] = expect_list(entry, form)? else {
                return Err(SemanticError::DomainError { procedure: form.to_string(),
                                                        details:   "options must be name/value pairs".to_string(), });
            };
            match expect_string_literal(name, form)? {
                "title" => parsed.title = Some(expect_string_literal(value, form)?.to_string()),
                "abscissa-label" => {
                    parsed.abscissa_label = Some(expect_string_literal(value, form)?.to_string());
                },
                "ordinate-label" => {
                    parsed.ordinate_label = Some(expect_string_literal(value, form)?.to_string());
                },
                "text-scale" => parsed.text_scale = expect_number(value, form)?,
                _ => {},
            }
        }

        Ok(parsed)
    }
}

/// Reads a `(list x y)` value as a coordinate pair.
///
/// # Errors
/// A fault naming `form` unless `point` is a list of exactly two real
/// numbers.
pub fn coordinates(point: &Expression, form: &str) -> EvalResult<(f64, f64)> {
    match expect_list(point, form)? {
        [x, y] => Ok((expect_number(x, form)?, expect_number(y, form)?)),
        _ => Err(SemanticError::DomainError { procedure: form.to_string(),
                                              details:   "expected a list of two numbers".to_string(), }),
    }
}

/// The data range of a plot and its mapping onto the scene.
///
/// Scene coordinates scale each axis so that the data fills a
/// `BOX_SIZE` square, and flip the y axis so that larger values are drawn
/// higher up.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x_min:   f64,
    x_max:   f64,
    y_min:   f64,
    y_max:   f64,
    x_scale: f64,
    y_scale: f64,
}

impl Frame {
    fn fit(points: &[(f64, f64)]) -> Self {
        let (x_min, x_max, y_min, y_max) =
            points.iter().fold((f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
                               |(x0, x1, y0, y1), &(x, y)| (x0.min(x), x1.max(x), y0.min(y), y1.max(y)));

        let scale = |span: f64| if span > 0.0 { BOX_SIZE / span } else { BOX_SIZE };

        Self { x_min,
               x_max,
               y_min,
               y_max,
               x_scale: scale(x_max - x_min),
               y_scale: scale(y_max - y_min) }
    }

    fn to_scene(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x * self.x_scale, -y * self.y_scale)
    }

    fn left(&self) -> f64 {
        self.x_min * self.x_scale
    }

    fn right(&self) -> f64 {
        self.x_max * self.x_scale
    }

    fn top(&self) -> f64 {
        -self.y_max * self.y_scale
    }

    fn bottom(&self) -> f64 {
        -self.y_min * self.y_scale
    }

    /// The bounding box, the axes through zero, the labels and the four tick
    /// labels.
    fn decorations(&self, options: &PlotOptions) -> Vec<Expression> {
        let (left, right, top, bottom) = (self.left(), self.right(), self.top(), self.bottom());
        let center_x = f64::midpoint(left, right);
        let center_y = f64::midpoint(top, bottom);
        let scale = options.text_scale;

        let mut items = vec![make_line((left, top), (right, top), FRAME_THICKNESS),
                             make_line((right, top), (right, bottom), FRAME_THICKNESS),
                             make_line((right, bottom), (left, bottom), FRAME_THICKNESS),
                             make_line((left, bottom), (left, top), FRAME_THICKNESS)];

        if self.y_min < 0.0 && self.y_max > 0.0 {
            items.push(make_line((left, 0.0), (right, 0.0), FRAME_THICKNESS));
        }
        if self.x_min < 0.0 && self.x_max > 0.0 {
            items.push(make_line((0.0, bottom), (0.0, top), FRAME_THICKNESS));
        }

        if let Some(title) = &options.title {
            items.push(make_text(title, (center_x, top - LABEL_OFFSET), scale, 0.0));
        }
        if let Some(label) = &options.abscissa_label {
            items.push(make_text(label, (center_x, bottom + LABEL_OFFSET), scale, 0.0));
        }
        if let Some(label) = &options.ordinate_label {
            items.push(make_text(label, (left - LABEL_OFFSET, center_y), scale, -FRAC_PI_2));
        }

        let tick = |value: f64, position: (f64, f64)| {
            make_text(&format_significant(value, TICK_DIGITS), position, scale, 0.0)
        };
        items.push(tick(self.x_min, (left, bottom + TICK_OFFSET)));
        items.push(tick(self.x_max, (right, bottom + TICK_OFFSET)));
        items.push(tick(self.y_min, (left - TICK_OFFSET, bottom)));
        items.push(tick(self.y_max, (left - TICK_OFFSET, top)));

        items
    }
}

fn ensure_finite(points: &[(f64, f64)], form: &str) -> EvalResult<()> {
    if points.iter().all(|(x, y)| x.is_finite() && y.is_finite()) {
        Ok(())
    } else {
        Err(SemanticError::DomainError { procedure: form.to_string(),
                                         details:   "plot data must be finite".to_string(), })
    }
}

/// Lays out a stem plot of `points`.
///
/// The result is a list of glyphs: the frame and labels, then for each point
/// in ascending `x` order a stem line from the axis (or the nearest frame
/// edge when zero is out of range) and a point of size `0.5`.
///
/// # Errors
/// `DomainError` for empty or non-finite data.
///
/// # Example
/// ```
/// use plotscript::interpreter::plot::{PlotOptions, discrete_plot};
///
/// let plot = discrete_plot(&[(1.0, 1.0), (-1.0, -1.0)], &PlotOptions::default()).unwrap();
/// assert!(plot.is_list());
///
/// let points = plot.tail()
///                  .iter()
///                  .filter(|item| {
///                      item.property("object-name")
///                          .and_then(|name| name.head().as_string_literal())
///                      == Some("point")
///                  })
///                  .count();
/// assert_eq!(points, 2);
/// ```
pub fn discrete_plot(points: &[(f64, f64)], options: &PlotOptions) -> EvalResult<Expression> {
    const FORM: &str = "discrete-plot";

    if points.is_empty() {
        return Err(SemanticError::DomainError { procedure: FORM.to_string(),
                                                details:   "no data to plot".to_string(), });
    }
    ensure_finite(points, FORM)?;

    let frame = Frame::fit(points);
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|&(x, _)| OrderedFloat(x));

    let base = 0.0_f64.clamp(frame.y_min, frame.y_max);
    let mut items = frame.decorations(options);
    for (x, y) in sorted {
        let (sx, sy) = frame.to_scene((x, y));
        items.push(make_line(frame.to_scene((x, base)), (sx, sy), FRAME_THICKNESS));
        items.push(make_point(sx, sy, POINT_SIZE));
    }

    Ok(Expression::list(items))
}

/// Angle in degrees between the segments `a -> b` and `b -> c`.
fn bend_degrees(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Option<f64> {
    let v1 = (b.0 - a.0, b.1 - a.1);
    let v2 = (c.0 - b.0, c.1 - b.1);
    let norms = v1.0.hypot(v1.1) * v2.0.hypot(v2.1);
    if norms <= 0.0 {
        return None;
    }
    let cos = v1.0.mul_add(v2.0, v1.1 * v2.1) / norms;
    Some(cos.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Lays out a line plot of `function` over `[lower, upper]`.
///
/// The function is sampled at `CURVE_SAMPLES + 1` evenly spaced points. At
/// up to `MAX_SMOOTHING` samples where the curve bends between 5 and 175
/// degrees, both adjacent intervals receive an extra sample at their
/// midpoint. Consecutive samples are joined with lines of thickness `0.5`,
/// drawn inside the same frame and labels as a discrete plot.
///
/// # Errors
/// - `DomainError` if `lower >= upper` or a sample is not finite.
/// - Any fault raised by `function`.
///
/// # Example
/// ```
/// use plotscript::interpreter::plot::{PlotOptions, continuous_plot};
///
/// let plot = continuous_plot(|x| Ok(2.0 * x), -1.0, 1.0, &PlotOptions::default()).unwrap();
/// assert!(plot.is_list());
///
/// assert!(continuous_plot(|x| Ok(x), 1.0, -1.0, &PlotOptions::default()).is_err());
/// ```
pub fn continuous_plot<F>(mut function: F,
                          lower: f64,
                          upper: f64,
                          options: &PlotOptions)
                          -> EvalResult<Expression>
    where F: FnMut(f64) -> EvalResult<f64>
{
    const FORM: &str = "continuous-plot";

    if lower.partial_cmp(&upper) != Some(Ordering::Less) {
        return Err(SemanticError::DomainError { procedure: FORM.to_string(),
                                                details:   "lower bound must be less than upper bound".to_string(), });
    }

    let step = (upper - lower) / f64::from(CURVE_SAMPLES);
    let mut samples = Vec::with_capacity(CURVE_SAMPLES as usize + 1);
    for k in 0..=CURVE_SAMPLES {
        let x = if k == CURVE_SAMPLES { upper } else { f64::from(k).mul_add(step, lower) };
        samples.push((x, function(x)?));
    }
    ensure_finite(&samples, FORM)?;

    let coarse = Frame::fit(&samples);
    let bends: Vec<usize> = (1..samples.len() - 1).filter(|&i| {
                                                      bend_degrees(coarse.to_scene(samples[i - 1]),
                                                                   coarse.to_scene(samples[i]),
                                                                   coarse.to_scene(samples[i + 1]))
                                                      .is_some_and(|angle| {
                                                          angle > MIN_BEND_DEGREES && angle < MAX_BEND_DEGREES
                                                      })
                                                  })
                                                  .take(MAX_SMOOTHING)
                                                  .collect();

    let mut refined = Vec::with_capacity(samples.len() + 2 * bends.len());
    refined.push(samples[0]);
    for i in 1..samples.len() {
        if bends.contains(&(i - 1)) || bends.contains(&i) {
            let x = f64::midpoint(samples[i - 1].0, samples[i].0);
            refined.push((x, function(x)?));
        }
        refined.push(samples[i]);
    }
    ensure_finite(&refined, FORM)?;

    let frame = Frame::fit(&refined);
    let mut items = frame.decorations(options);
    items.extend(refined.windows(2).map(|pair| {
                                        make_line(frame.to_scene(pair[0]),
                                                  frame.to_scene(pair[1]),
                                                  CURVE_THICKNESS)
                                    }));

    Ok(Expression::list(items))
}
