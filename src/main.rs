use overlay_placement::image::RgbaImageU8;
use overlay_placement::{PlacementAnalyzer, PlacementOptions};

fn main() {
    // Demo stub: runs the analyzer over a flat synthetic RGBA buffer
    let w = 128usize;
    let h = 72usize;
    let pixels = vec![128u8; w * h * 4];
    let img = RgbaImageU8 {
        w,
        h,
        stride: w,
        data: &pixels,
    };

    let analyzer = PlacementAnalyzer::new(PlacementOptions::default());
    let res = analyzer.analyze_with_thread_rng(&img);
    println!(
        "x={:.1}% y={:.1}% confidence={:.3} latency_ms={:.3}",
        res.x, res.y, res.confidence, res.latency_ms
    );
}
