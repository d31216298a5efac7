//! Station name lookup.

use std::collections::HashMap;

use crate::domain::StopId;

/// Long Island Rail Road stations as (name, stop id).
const LIRR_STATIONS: &[(&str, &str)] = &[
    ("Albertson", "1"),
    ("Amagansett", "4"),
    ("Amityville", "8"),
    ("Atlantic Terminal", "241"),
    ("Auburndale", "2"),
    ("Babylon", "27"),
    ("Baldwin", "225"),
    ("Bay Shore", "26"),
    ("Bayside", "25"),
    ("Bellerose", "23"),
    ("Bellmore", "16"),
    ("Belmont Park", "24"),
    ("Bethpage", "20"),
    ("Brentwood", "29"),
    ("Bridgehampton", "13"),
    ("Broadway", "11"),
    ("Carle Place", "39"),
    ("Cedarhurst", "32"),
    ("Central Islip", "33"),
    ("Centre Avenue", "31"),
    ("Cold Spring Harbor", "40"),
    ("Copiague", "38"),
    ("Country Life Press", "36"),
    ("Deer Park", "44"),
    ("Douglaston", "42"),
    ("East Hampton", "48"),
    ("East New York", "50"),
    ("East Rockaway", "51"),
    ("East Williston", "52"),
    ("Elmont-UBS Arena", "359"),
    ("Far Rockaway", "65"),
    ("Farmingdale", "59"),
    ("Floral Park", "63"),
    ("Flushing Main Street", "56"),
    ("Forest Hills", "55"),
    ("Freeport", "64"),
    ("Garden City", "68"),
    ("Gibson", "66"),
    ("Glen Cove", "67"),
    ("Glen Head", "71"),
    ("Glen Street", "76"),
    ("Grand Central", "349"),
    ("Great Neck", "72"),
    ("Great River", "74"),
    ("Greenlawn", "78"),
    ("Greenport", "73"),
    ("Greenvale", "77"),
    ("Hampton Bays", "83"),
    ("Hempstead", "84"),
    ("Hempstead Gardens", "85"),
    ("Hewlett", "94"),
    ("Hicksville", "92"),
    ("Hillside Facility", "86"),
    ("Hollis", "89"),
    ("Hunterspoint Avenue", "90"),
    ("Huntington", "91"),
    ("Inwood", "101"),
    ("Island Park", "99"),
    ("Islip", "100"),
    ("Jamaica", "102"),
    ("Kew Gardens", "107"),
    ("Kings Park", "111"),
    ("Lakeview", "124"),
    ("Laurelton", "122"),
    ("Lawrence", "114"),
    ("Lindenhurst", "117"),
    ("Little Neck", "120"),
    ("Locust Manor", "119"),
    ("Locust Valley", "123"),
    ("Long Beach", "113"),
    ("Long Island City", "118"),
    ("Lynbrook", "125"),
    ("Malverne", "142"),
    ("Manhasset", "131"),
    ("Massapequa", "136"),
    ("Massapequa Park", "135"),
    ("Mastic-Shirley", "140"),
    ("Mattituck", "126"),
    ("Medford", "129"),
    ("Merillon Avenue", "127"),
    ("Merrick", "226"),
    ("Mets-Willets Point", "199"),
    ("Mineola", "132"),
    ("Montauk", "141"),
    ("Murray Hill", "130"),
    ("Nassau Boulevard", "149"),
    ("New Hyde Park", "152"),
    ("Northport", "153"),
    ("Nostrand Avenue", "148"),
    ("Oakdale", "157"),
    ("Oceanside", "155"),
    ("Oyster Bay", "154"),
    ("Patchogue", "163"),
    ("Penn Station", "237"),
    ("Pinelawn", "165"),
    ("Plandome", "162"),
    ("Port Jefferson", "164"),
    ("Port Washington", "171"),
    ("Queens Village", "175"),
    ("Riverhead", "176"),
    ("Rockville Centre", "183"),
    ("Ronkonkoma", "179"),
    ("Rosedale", "180"),
    ("Roslyn", "182"),
    ("Sayville", "204"),
    ("Sea Cliff", "185"),
    ("Seaford", "187"),
    ("Southampton", "191"),
    ("Southold", "190"),
    ("Speonk", "198"),
    ("St. Albans", "184"),
    ("St. James", "193"),
    ("Stewart Manor", "195"),
    ("Stony Brook", "14"),
    ("Syosset", "205"),
    ("Valley Stream", "211"),
    ("Wantagh", "215"),
    ("West Hempstead", "216"),
    ("Westbury", "213"),
    ("Westhampton", "233"),
    ("Westwood", "219"),
    ("Woodmere", "217"),
    ("Woodside", "214"),
    ("Wyandanch", "220"),
    ("Yaphank", "223"),
];

/// Read-only station name ↔ stop id lookup.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    by_name: HashMap<String, StopId>,
    by_folded_name: HashMap<String, StopId>,
    by_id: HashMap<StopId, String>,
}

impl StationDirectory {
    /// Build a directory from (name, stop id) pairs.
    ///
    /// If an id appears under several names, the first name wins for
    /// reverse lookups.
    pub fn new<I, N, S>(stations: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: AsRef<str>,
    {
        let mut directory = Self::default();
        for (name, id) in stations {
            let name = name.into();
            let id = StopId::new(id);
            directory
                .by_folded_name
                .insert(name.to_lowercase(), id.clone());
            directory.by_id.entry(id.clone()).or_insert_with(|| name.clone());
            directory.by_name.insert(name, id);
        }
        directory
    }

    /// The Long Island Rail Road station table.
    pub fn lirr() -> Self {
        Self::new(LIRR_STATIONS.iter().copied())
    }

    /// Look up a stop id by station name.
    ///
    /// Exact names match first; otherwise the name is matched ignoring
    /// case and surrounding whitespace.
    pub fn id_of(&self, name: &str) -> Option<&StopId> {
        self.by_name
            .get(name)
            .or_else(|| self.by_folded_name.get(&name.trim().to_lowercase()))
    }

    /// Look up a station name by stop id.
    pub fn name_of(&self, id: &StopId) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    /// All station names, sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
