//! Built-in abbreviation tables for Spartanburg County road names.
//!
//! Entries are applied in order; when a key repeats, the later entry wins.

/// Road-type suffixes plus the four compass points.
pub const SUFFIX_ENTRIES: &[(&str, &str)] = &[
    ("Aly", "Alley"),
    ("Ave", "Avenue"),
    ("Br", "Branch"),
    ("Blf", "Bluff"),
    ("Rd", "Road"),
    ("Hts", "Heights"),
    ("St", "Street"),
    ("Pl", "Place"),
    ("Hl", "Hill"),
    ("Holw", "Hollow"),
    ("Pk", "Park"),
    ("Cres", "Crescent"),
    ("Blvd", "Boulevard"),
    ("Dr", "Drive"),
    ("Dwns", "Downs"),
    ("Ext", "Extension"),
    ("Pkwy", "Parkway"),
    ("Lndg", "Landing"),
    ("Xing", "Crossing"),
    ("Lane", "Lane"),
    ("Cv", "Cove"),
    ("Crt", "Court"),
    ("Trl", "Trail"),
    ("Tr", "Trail"),
    ("Ter", "Terrace"),
    ("Trc", "Trace"),
    ("Trce", "Trace"),
    ("Vly", "Valley"),
    ("Xovr", "Crossover"),
    ("Gr", "Grove"),
    ("Grv", "Grove"),
    ("Ln", "Lane"),
    ("Lk", "Lake"),
    ("Cl", "Close"),
    ("Cv", "Cove"),
    ("Cir", "Circle"),
    ("Ct", "Court"),
    ("Est", "Estate"),
    ("Rdg", "Ridge"),
    ("Plz", "Plaza"),
    ("Pne", "Pine"),
    ("Pte", "Pointe"),
    ("Pnes", "Pines"),
    ("Pt", "Point"),
    ("Ctr", "Center"),
    ("Rwy", "Railway"),
    ("Div", "Diversion"),
    ("Mnr", "Manor"),
    ("Hwy", "Highway"),
    ("Conn", "Connector"),
    ("Chase", "Chase"),
    ("View", "View"),
    ("Cliff", "Cliff"),
    ("Walk", "Walk"),
    ("Gate", "Gate"),
    ("Grove", "Grove"),
    ("Path", "Path"),
    ("Trail", "Trail"),
    ("Place", "Place"),
    ("Real", "Realignment"),
    ("Pass", "Pass"),
    ("Row", "Row"),
    ("Way", "Way"),
    ("Farm", "Farm"),
    ("Run", "Run"),
    ("Drive", "Drive"),
    ("Loop", "Loop"),
    ("Line", "Line"),
    ("E", "East"),
    ("S", "South"),
    ("N", "North"),
    ("W", "West"),
];

/// Predirectionals. `N` appears twice: `New` first, then `North`, which wins.
pub const DIRECTION_ENTRIES: &[(&str, &str)] = &[
    ("O", "Old"),
    ("N", "New"),
    ("NW", "NorthWest"),
    ("NE", "NorthEast"),
    ("SE", "SouthEast"),
    ("SW", "SouthWest"),
    ("E", "East"),
    ("S", "South"),
    ("N", "North"),
    ("W", "West"),
];
