use plotscript::{get_result, interpreter::value::expression::Expression};

fn object_name(item: &Expression) -> Option<&str> {
    item.property("object-name")
        .and_then(|name| name.head().as_string_literal())
}

fn count_named(plot: &Expression, name: &str) -> usize {
    plot.tail()
        .iter()
        .filter(|item| object_name(item) == Some(name))
        .count()
}

fn texts(plot: &Expression) -> Vec<String> {
    plot.tail()
        .iter()
        .filter(|item| object_name(item) == Some("text"))
        .filter_map(|item| item.head().as_string_literal().map(str::to_string))
        .collect()
}

#[test]
fn discrete_plot_layout() {
    let plot = get_result(r#"(discrete-plot (list (list -1 -1) (list 1 1))
                                            (list (list "title" "The Title")
                                                  (list "abscissa-label" "X Label")
                                                  (list "ordinate-label" "Y Label")
                                                  (list "text-scale" 1)))"#).unwrap();

    // Two points, each with a stem.
    assert_eq!(count_named(&plot, "point"), 2);
    // Four frame edges, two axes, two stems.
    assert_eq!(count_named(&plot, "line"), 8);

    let labels = texts(&plot);
    for expected in ["The Title", "X Label", "Y Label", "-1", "1"] {
        assert!(labels.iter().any(|l| l == expected), "missing label {expected}");
    }
    assert_eq!(labels.len(), 7);
}

#[test]
fn discrete_plot_points_fill_the_frame() {
    let plot = get_result("(discrete-plot (list (list 0 0) (list 2 4)) (list))").unwrap();

    let points: Vec<(f64, f64)> =
        plot.tail()
            .iter()
            .filter(|item| object_name(item) == Some("point"))
            .map(|p| {
                (p.tail()[0].head().as_number().unwrap(), p.tail()[1].head().as_number().unwrap())
            })
            .collect();

    assert_eq!(points, vec![(0.0, 0.0), (20.0, -20.0)]);
    // No axes: zero is on the frame edge.
    assert_eq!(count_named(&plot, "line"), 6);
}

#[test]
fn ordinate_label_is_rotated() {
    let plot = get_result(r#"(discrete-plot (list (list 0 0) (list 1 1))
                                            (list (list "ordinate-label" "Y")))"#).unwrap();
    let label = plot.tail()
                    .iter()
                    .find(|item| item.head().as_string_literal() == Some("Y"))
                    .unwrap();
    let rotation = label.property("text-rotation")
                        .and_then(|r| r.head().as_number())
                        .unwrap();
    assert!((rotation + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn continuous_plot_draws_connected_segments() {
    let plot = get_result("(begin (define f (lambda (x) (* 2 x))) (continuous-plot f (list -2 2)))")
        .unwrap();

    // A straight line never bends, so no smoothing samples are added.
    assert_eq!(count_named(&plot, "line"), 4 + 2 + 50);

    let curve: Vec<&Expression> = plot.tail()
                                      .iter()
                                      .filter(|item| {
                                          item.property("thickness")
                                          == Some(&Expression::from(0.5))
                                      })
                                      .collect();
    assert_eq!(curve.len(), 50);
    for pair in curve.windows(2) {
        assert_eq!(pair[0].tail()[1], pair[1].tail()[0]);
    }
}

#[test]
fn continuous_plot_smooths_bends() {
    let plot = get_result("(continuous-plot sin (list -10 10))").unwrap();

    let curve = plot.tail()
                    .iter()
                    .filter(|item| item.property("thickness") == Some(&Expression::from(0.5)))
                    .count();
    assert!(curve > 50);
    assert!(curve <= 50 + 2 * 10);
}

#[test]
fn plot_faults() {
    assert!(get_result("(discrete-plot (list) (list))").is_err());
    assert!(get_result("(discrete-plot (list 1 2) (list))").is_err());
    assert!(get_result("(discrete-plot (list (list 1 2)))").is_err());
    assert!(get_result(r#"(discrete-plot (list (list 1 2)) (list (list "title" 3)))"#).is_err());
    assert!(get_result("(continuous-plot sin (list 1 -1))").is_err());
    assert!(get_result("(continuous-plot ^ (list -1 1))").is_err());
    assert!(get_result("(continuous-plot undefined (list -1 1))").is_err());
    assert!(get_result("(continuous-plot sin (list -1))").is_err());
}
