//! Map data around George Square, Edinburgh, as served by the ILP REST service.

#![allow(dead_code)]

use drone_planner::geometry::NamedRegion;
use drone_planner::model::{DayOfWeek, Pizza, Restaurant};
use drone_planner::position::Position;

fn polygon(name: &str, points: &[(f64, f64)]) -> NamedRegion {
    NamedRegion::new(
        name,
        points.iter().map(|&(lng, lat)| Position::new(lng, lat)).collect(),
    )
}

pub fn central_area() -> NamedRegion {
    polygon(
        "central",
        &[
            (-3.192473, 55.946233),
            (-3.192473, 55.942617),
            (-3.184319, 55.942617),
            (-3.184319, 55.946233),
        ],
    )
}

pub fn no_fly_zones() -> Vec<NamedRegion> {
    vec![
        polygon(
            "George Square Area",
            &[
                (-3.190578818321228, 55.94402412577528),
                (-3.1899887323379517, 55.94284650540911),
                (-3.187097311019897, 55.94328811724263),
                (-3.187682032585144, 55.944477740393744),
                (-3.190578818321228, 55.94402412577528),
            ],
        ),
        polygon(
            "Dr Elsie Inglis Quadrangle",
            &[
                (-3.1907182931900024, 55.94519570234043),
                (-3.1906163692474365, 55.94498241796357),
                (-3.1900262832641597, 55.94507554227258),
                (-3.190133571624756, 55.94529783810495),
                (-3.1907182931900024, 55.94519570234043),
            ],
        ),
        polygon(
            "Bristo Square Open Area",
            &[
                (-3.189543485641479, 55.94552313663306),
                (-3.189382553100586, 55.94553214854692),
                (-3.189259171485901, 55.94544803726933),
                (-3.1892001628875732, 55.94533688994374),
                (-3.189194798469543, 55.94519570234043),
                (-3.189135789871216, 55.94511759833873),
                (-3.188138008117676, 55.9452738940428),
                (-3.1885510683059692, 55.946105902745614),
                (-3.1895381212234497, 55.94555918427592),
                (-3.189543485641479, 55.94552313663306),
            ],
        ),
        polygon(
            "Bayes Central Area",
            &[
                (-3.1876927614212036, 55.94520696732767),
                (-3.187555968761444, 55.9449621408666),
                (-3.186981976032257, 55.94505676722831),
                (-3.1872327625846863, 55.94536993377657),
                (-3.1874459981918335, 55.9453361389472),
                (-3.1873735785484314, 55.94519344934259),
                (-3.1875935196876526, 55.94515665035927),
                (-3.187624365091324, 55.94521973430925),
                (-3.1876927614212036, 55.94520696732767),
            ],
        ),
    ]
}

pub const DOMINOS: Position = Position::new(-3.1838572025299072, 55.94449876875712);
pub const LA_TRATTORIA: Position = Position::new(-3.1810810679852035, 55.938910643735845);

const EVERY_DAY: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

pub fn restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant {
            name: "Domino's Pizza - Edinburgh - Southside".to_string(),
            location: DOMINOS,
            opening_days: EVERY_DAY.to_vec(),
            menu: vec![
                Pizza::new("R3: Super Cheese", 1400),
                Pizza::new("R3: All Shrooms", 900),
            ],
        },
        Restaurant {
            name: "La Trattoria".to_string(),
            location: LA_TRATTORIA,
            opening_days: vec![DayOfWeek::Monday, DayOfWeek::Thursday, DayOfWeek::Friday],
            menu: vec![
                Pizza::new("R6: Sucuk delight", 1400),
                Pizza::new("R6: Dreams of Syria", 900),
            ],
        },
    ]
}
