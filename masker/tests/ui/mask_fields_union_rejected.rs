use masker::MaskFields;

#[allow(dead_code)]
#[derive(MaskFields)]
union Raw {
    #[mask(code)]
    bits: u32,
}

fn main() {}
