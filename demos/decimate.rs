use liveplot_curve::{
    FilterConfig, MarkerShape, Point, RenderList, SampleSeries, ViewTransform, Viewport,
};

fn main() {
    let mut series = SampleSeries::from_pairs(
        (0..100_000).map(|i| i as f64 * 0.001),
        (0..100_000).map(|i| {
            let t = i as f64 * 0.001;
            (t * 3.0).sin() + 0.05 * (t * 400.0).sin()
        }),
    )
    .unwrap()
    .with_config(FilterConfig::default().with_thin_tolerance_px(0.5));

    let view = Viewport::from_corners(Point::new(20.0, -1.2), Point::new(40.0, 1.2));
    let data_to_view = ViewTransform::data_to_view(view, 800.0, 400.0).unwrap();
    let view_to_data = data_to_view.inverse().unwrap();

    let outcome = series.filter_for_viewport(&view_to_data, view);
    let excluded = series.thin_by_interpolation(&view_to_data);

    let mut list = RenderList::new();
    let segments = series.emit_polyline(&data_to_view, &mut list);
    let markers = series.emit_markers(&data_to_view, MarkerShape::Circle, 4.0, &mut list);

    println!("points:   {}", series.len());
    println!("outcome:  {outcome:?}");
    println!("thinned:  {excluded}");
    println!("segments: {segments}");
    println!("markers:  {markers}");
    println!("commands: {}", list.commands().len());
}
