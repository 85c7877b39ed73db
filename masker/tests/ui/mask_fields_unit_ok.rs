use masker::MaskFields;

#[derive(MaskFields)]
struct Marker;

fn main() {
    let _ = Marker.masked();
}
