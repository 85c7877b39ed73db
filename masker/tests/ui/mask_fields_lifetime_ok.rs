use masker::MaskFields;

#[derive(MaskFields)]
struct Request<'a> {
    path: &'a str,
    #[mask(email)]
    user: String,
}

fn main() {
    let request = Request {
        path: "/login",
        user: "test.mail@gmail.com".to_string(),
    }
    .masked();
    assert_eq!(request.path, "/login");
    assert_eq!(request.user, "tes****il@gmail.com");
}
