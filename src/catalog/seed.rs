use super::Cafe;
use std::collections::HashMap;

pub(super) fn cities() -> HashMap<String, Vec<Cafe>> {
    HashMap::from([
        (
            "moscow".to_string(),
            vec![
                Cafe::new("Мир кофе", "ул. Тверская, 12"),
                Cafe::new("Сладкоежка", "ул. Арбат, 24"),
                Cafe::new("Кофе и вилка", "Покровка, 3"),
                Cafe::new("Ложка дёгтя", "Пятницкая ул., 7"),
                Cafe::new("Чайная лавка", "Маросейка, 9"),
            ],
        ),
        (
            "tula".to_string(),
            vec![
                Cafe::new("Самовар", "пр. Ленина, 40"),
                Cafe::new("Тульский пряник", "ул. Металлистов, 5"),
                Cafe::new("Оружейная", "Советская ул., 18"),
            ],
        ),
    ])
}
