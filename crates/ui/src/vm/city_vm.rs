use tour_core::model::City;

/// Row in the city picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityListItemVm {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitySectionVm {
    pub title: &'static str,
    pub items: Vec<String>,
}

/// UI-ready city page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityDetailVm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sections: Vec<CitySectionVm>,
}

#[must_use]
pub fn map_city_list(cities: &[City]) -> Vec<CityListItemVm> {
    cities
        .iter()
        .map(|city| CityListItemVm {
            id: city.id().to_string(),
            label: format_city_label(city.name(), city.tagline()),
        })
        .collect()
}

#[must_use]
pub fn map_city_detail(city: &City) -> CityDetailVm {
    let sections = city.sections();
    let section = |title, items: &Vec<String>| CitySectionVm {
        title,
        items: items.clone(),
    };

    CityDetailVm {
        id: city.id().to_string(),
        name: city.name().to_owned(),
        description: city.description().to_owned(),
        sections: vec![
            section("Food", &sections.food),
            section("Festivals", &sections.festivals),
            section("Monuments", &sections.monuments),
            section("Art & Crafts", &sections.art),
            section("Facts", &sections.facts),
        ],
    }
}

fn format_city_label(name: &str, tagline: &str) -> String {
    if tagline.trim().is_empty() {
        name.to_owned()
    } else {
        format!("{name} – {tagline}")
    }
}
