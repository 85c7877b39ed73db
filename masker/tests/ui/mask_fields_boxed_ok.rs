use masker::MaskFields;

#[derive(MaskFields)]
struct Account {
    #[mask(last_four_digits)]
    number: String,
    #[mask(nested)]
    parent: Option<Box<Account>>,
}

fn main() {
    let account = Account {
        number: "40817810099910004312".to_string(),
        parent: Some(Box::new(Account {
            number: "123".to_string(),
            parent: None,
        })),
    }
    .masked();
    assert_eq!(account.number, "****************4312");
    assert_eq!(account.parent.map(|parent| parent.number).as_deref(), Some("****"));
}
