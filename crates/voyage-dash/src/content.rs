//! Static page text.

pub const HOME_TITLE: &str = "Home Page";
pub const HOME_WELCOME: &str = "Welcome to the multi-page Dash app exploration.";

pub const OVERVIEW_TITLE: &str = "Spaceship Titanic Dataset Overview";

pub const OVERVIEW_INTRO: [&str; 3] = [
    "The journey of the Spaceship Titanic is one of the most ambitious space voyages in history.",
    "On its maiden interstellar voyage, the marvel of engineering known as Spaceship Titanic \
     encountered a cosmic anomaly. Despite advanced technology, the event led to an unknown \
     number of passengers being transported elsewhere, mirroring the mystery and tragedy of its \
     ancient Earth namesake.",
    "As with the ocean-bound Titanic, certain demographic factors seemed to influence the \
     likelihood of a passenger's transportation to parts unknown.",
];

pub const OVERVIEW_VARIABLES_TITLE: &str = "Data Variables";

pub const OVERVIEW_VARIABLES: [&str; 9] = [
    "Transported: 0 = Not Transported, 1 = Transported",
    "HomePlanet: The planet from which the passenger boarded the spaceship",
    "CryoSleep: Indicates if the passenger was in suspended animation for the trip",
    "Cabin: Spacecraft cabin number indicating deck/number/side",
    "Destination: The planet that the passenger was due to disembark at",
    "Age: Passenger age",
    "VIP: Indicates if the passenger paid for special VIP service during the voyage",
    "RoomService, FoodCourt, ShoppingMall, Spa, VRDeck: Amount the passenger billed at each of \
     the Spaceship Titanic's many luxury amenities",
    "Name: Passenger name",
];

pub const OVERVIEW_OUTRO: &str = "This dataset invites us to examine the socio-economic factors \
     aboard the Spaceship Titanic, mirroring the in-depth analyses possible with its historical \
     counterpart.";

pub const DATASET_TITLE: &str = "Dataset Overview";
pub const DISTRIBUTION_TITLE: &str = "Distribution Analysis";
pub const RELATIONSHIP_TITLE: &str = "Relationship Analysis";
pub const CATEGORICAL_TITLE: &str = "Categorical Analysis";
pub const OUTCOME_TITLE: &str = "Outcome Analysis";

pub const NOT_FOUND: &str = "404 Page Not Found";
