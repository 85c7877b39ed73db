use masker::MaskFields;

#[allow(dead_code)]
#[derive(MaskFields)]
struct Citizen {
    #[mask(ssn)]
    social_security: String,
}

fn main() {}
