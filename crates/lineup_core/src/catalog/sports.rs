//! Catalog data for the five supported sports.
//!
//! Coordinates follow the drawing convention of the field views: x grows
//! left to right, y grows toward the near (own) end, both 0..=100.

use super::{FormationSpec, SlotSpec, Sport, SportId};

const fn slot(label: &'static str, x: f32, y: f32) -> SlotSpec {
    SlotSpec { label, x, y }
}

// Soccer

const SOCCER_442_WIDE: FormationSpec = FormationSpec {
    name: "4-4-2 Wide",
    slots: &[
        slot("GK", 50.0, 94.0),
        slot("LB", 15.0, 78.0),
        slot("LCB", 35.0, 82.0),
        slot("RCB", 65.0, 82.0),
        slot("RB", 85.0, 78.0),
        slot("LM", 15.0, 54.0),
        slot("LCM", 38.0, 58.0),
        slot("RCM", 62.0, 58.0),
        slot("RM", 85.0, 54.0),
        slot("LST", 32.0, 26.0),
        slot("RST", 68.0, 26.0),
    ],
};

const SOCCER_433_SPREAD: FormationSpec = FormationSpec {
    name: "4-3-3 Spread",
    slots: &[
        slot("GK", 50.0, 94.0),
        slot("LB", 15.0, 77.0),
        slot("LCB", 35.0, 84.0),
        slot("RCB", 65.0, 84.0),
        slot("RB", 85.0, 77.0),
        slot("CDM", 50.0, 64.0),
        slot("LCM", 28.0, 49.0),
        slot("RCM", 72.0, 49.0),
        slot("LW", 18.0, 20.0),
        slot("RW", 82.0, 20.0),
        slot("ST", 50.0, 14.0),
    ],
};

// Basketball

const BASKETBALL_MAN_TO_MAN: FormationSpec = FormationSpec {
    name: "Man-to-Man",
    slots: &[
        slot("PG", 50.0, 78.0),
        slot("SG", 20.0, 63.0),
        slot("SF", 80.0, 63.0),
        slot("PF", 30.0, 37.0),
        slot("C", 70.0, 37.0),
    ],
};

const BASKETBALL_23_ZONE: FormationSpec = FormationSpec {
    name: "2-3 Zone",
    slots: &[
        slot("LG", 35.0, 74.0),
        slot("RG", 65.0, 74.0),
        slot("LF", 15.0, 48.0),
        slot("RF", 85.0, 48.0),
        slot("C", 50.0, 37.0),
    ],
};

// Hockey

const HOCKEY_STANDARD_5V5: FormationSpec = FormationSpec {
    name: "Standard 5v5",
    slots: &[
        slot("G", 50.0, 93.0),
        slot("LD", 25.0, 75.0),
        slot("RD", 75.0, 75.0),
        slot("LW", 15.0, 39.0),
        slot("C", 50.0, 43.0),
        slot("RW", 85.0, 39.0),
    ],
};

const HOCKEY_POWER_PLAY: FormationSpec = FormationSpec {
    name: "Power Play (1-3-1)",
    slots: &[
        slot("G", 50.0, 93.0),
        slot("D", 50.0, 71.0),
        slot("LW", 15.0, 46.0),
        slot("RW", 85.0, 46.0),
        slot("B", 50.0, 39.0),
        slot("C", 50.0, 18.0),
    ],
};

// American football

const FOOTBALL_SHOTGUN_SPREAD: FormationSpec = FormationSpec {
    name: "Shotgun Spread",
    slots: &[
        slot("C", 50.0, 45.0),
        slot("LG", 40.0, 45.0),
        slot("RG", 60.0, 45.0),
        slot("LT", 30.0, 45.0),
        slot("RT", 70.0, 45.0),
        slot("WR1", 8.0, 32.0),
        slot("WR2", 22.0, 32.0),
        slot("WR3", 78.0, 32.0),
        slot("WR4", 92.0, 32.0),
        slot("QB", 50.0, 76.0),
        slot("RB", 38.0, 76.0),
    ],
};

const FOOTBALL_BASE_34_DEFENSE: FormationSpec = FormationSpec {
    name: "Base 3-4 Defense",
    slots: &[
        slot("NT", 50.0, 43.0),
        slot("LDE", 38.0, 43.0),
        slot("RDE", 62.0, 43.0),
        slot("LOLB", 20.0, 55.0),
        slot("ROLB", 80.0, 55.0),
        slot("LILB", 42.0, 65.0),
        slot("RILB", 58.0, 65.0),
        slot("LCB", 10.0, 40.0),
        slot("RCB", 90.0, 40.0),
        slot("FS", 30.0, 28.0),
        slot("SS", 70.0, 28.0),
    ],
};

const FOOTBALL_NICKEL_245: FormationSpec = FormationSpec {
    name: "Nickel 2-4-5",
    slots: &[
        slot("LDT", 46.0, 58.0),
        slot("RDT", 54.0, 58.0),
        slot("LOLB", 22.0, 55.0),
        slot("ROLB", 78.0, 55.0),
        slot("LILB", 44.0, 70.0),
        slot("RILB", 56.0, 70.0),
        slot("LCB", 10.0, 42.0),
        slot("RCB", 90.0, 42.0),
        slot("NIC", 50.0, 40.0),
        slot("FS", 32.0, 25.0),
        slot("SS", 68.0, 25.0),
    ],
};

// Baseball

const BASEBALL_STANDARD_DEFENSE: FormationSpec = FormationSpec {
    name: "Standard Defense",
    slots: &[
        slot("P", 50.0, 65.0),
        slot("C", 50.0, 92.0),
        slot("1B", 80.0, 68.0),
        slot("2B", 68.0, 50.0),
        slot("SS", 32.0, 50.0),
        slot("3B", 20.0, 68.0),
        slot("LF", 18.0, 32.0),
        slot("CF", 50.0, 18.0),
        slot("RF", 82.0, 32.0),
    ],
};

/// The full catalog. Order matches the dashboard's sport picker.
pub const SPORTS: &[Sport] = &[
    Sport {
        id: SportId::Soccer,
        name: "Soccer",
        formations: &[SOCCER_442_WIDE, SOCCER_433_SPREAD],
    },
    Sport {
        id: SportId::Basketball,
        name: "Basketball",
        formations: &[BASKETBALL_MAN_TO_MAN, BASKETBALL_23_ZONE],
    },
    Sport {
        id: SportId::Hockey,
        name: "Hockey",
        formations: &[HOCKEY_STANDARD_5V5, HOCKEY_POWER_PLAY],
    },
    Sport {
        id: SportId::Football,
        name: "Football",
        formations: &[FOOTBALL_SHOTGUN_SPREAD, FOOTBALL_BASE_34_DEFENSE, FOOTBALL_NICKEL_245],
    },
    Sport {
        id: SportId::Baseball,
        name: "Baseball",
        formations: &[BASEBALL_STANDARD_DEFENSE],
    },
];
