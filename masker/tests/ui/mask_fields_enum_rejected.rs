use masker::MaskFields;

#[allow(dead_code)]
#[derive(MaskFields)]
enum Contact {
    Email(#[mask(email)] String),
}

fn main() {}
