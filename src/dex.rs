use schema::{AbilityData, MoveData, SpeciesData};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Normalize a display name or raw token into a catalog id: lowercase
/// ASCII alphanumerics only ("Swift Swim" -> "swiftswim").
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// On-disk catalog format: one RON file holding every table.
#[derive(Debug, Serialize, Deserialize)]
struct DexFile {
    species: Vec<SpeciesData>,
    moves: Vec<MoveData>,
    abilities: Vec<AbilityData>,
    lc_banlist: Vec<String>,
}

/// The species catalog and its lookup tables. Built once, read-only for the
/// lifetime of every query that runs against it.
#[derive(Debug, Clone)]
pub struct Pokedex {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
    abilities: HashMap<String, AbilityData>,
    lc_banlist: HashSet<String>,
}

impl Pokedex {
    pub fn new(
        species: Vec<SpeciesData>,
        moves: Vec<MoveData>,
        abilities: Vec<AbilityData>,
        lc_banlist: Vec<String>,
    ) -> Self {
        Pokedex {
            species: species.into_iter().map(|s| (s.id.clone(), s)).collect(),
            moves: moves.into_iter().map(|m| (m.id.clone(), m)).collect(),
            abilities: abilities.into_iter().map(|a| (a.id.clone(), a)).collect(),
            lc_banlist: lc_banlist.into_iter().collect(),
        }
    }

    /// Load the catalog from `<data_path>/dex.ron`.
    pub fn load(data_path: &Path) -> Result<Pokedex, Box<dyn std::error::Error>> {
        let dex_file = data_path.join("dex.ron");

        if !dex_file.exists() {
            return Err(format!("Dex catalog not found: {}", dex_file.display()).into());
        }

        let content = fs::read_to_string(&dex_file)?;
        let file: DexFile = ron::from_str(&content)?;
        Ok(Pokedex::new(
            file.species,
            file.moves,
            file.abilities,
            file.lc_banlist,
        ))
    }

    pub fn species(&self, id: &str) -> Option<&SpeciesData> {
        self.species.get(id)
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Bulk enumeration for the base catalog scan.
    pub fn all_species(&self) -> impl Iterator<Item = &SpeciesData> {
        self.species.values()
    }

    pub fn get_move(&self, id: &str) -> Option<&MoveData> {
        self.moves.get(id)
    }

    pub fn ability_exists(&self, id: &str) -> bool {
        self.abilities.contains_key(id)
    }

    pub fn lc_banlist_contains(&self, species_id: &str) -> bool {
        self.lc_banlist.contains(species_id)
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use schema::{Color, EvolutionData, EvolutionMethod, Learnset, PokemonType, Tier};

    #[allow(clippy::too_many_arguments)]
    fn species(
        id: &str,
        name: &str,
        types: &[PokemonType],
        tier: Tier,
        color: Color,
        gen: u8,
        abilities: &[&str],
        evos: &[&str],
        prevo: Option<&str>,
        base: Option<&str>,
        moves: &[&str],
    ) -> SpeciesData {
        SpeciesData {
            id: id.to_string(),
            name: name.to_string(),
            types: types.to_vec(),
            tier,
            color,
            gen,
            abilities: abilities.iter().map(|a| a.to_string()).collect(),
            is_mega: false,
            evos: evos
                .iter()
                .map(|into| EvolutionData {
                    into: into.to_string(),
                    method: EvolutionMethod::Level(16),
                })
                .collect(),
            prevo: prevo.map(|p| p.to_string()),
            base_species: base.map(|b| b.to_string()),
            learnset: Learnset::from_move_ids(moves),
        }
    }

    fn named(id: &str, name: &str) -> MoveData {
        MoveData {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn ability(id: &str, name: &str) -> AbilityData {
        AbilityData {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    /// A small but representative catalog: three full evolution lines, a
    /// mega forme, pre-evolutions, an LC-banned species, a sketch user, and
    /// the synthetic Unreleased/Illegal/CAP tiers.
    pub(crate) fn sample_dex() -> Pokedex {
        use Color::*;
        use PokemonType::*;
        use Tier::*;

        let mut megax = species(
            "charizardmegax",
            "Charizard-Mega-X",
            &[Fire, Dragon],
            Uber,
            Black,
            6,
            &["toughclaws"],
            &[],
            None,
            Some("Charmander"),
            &["flamethrower", "dragonclaw"],
        );
        megax.is_mega = true;

        let species_list = vec![
            species(
                "bulbasaur",
                "Bulbasaur",
                &[Grass, Poison],
                Lc,
                Green,
                1,
                &["overgrow", "chlorophyll"],
                &["ivysaur"],
                None,
                None,
                &["tackle", "growl", "vinewhip"],
            ),
            species(
                "ivysaur",
                "Ivysaur",
                &[Grass, Poison],
                Nu,
                Green,
                1,
                &["overgrow", "chlorophyll"],
                &["venusaur"],
                Some("bulbasaur"),
                Some("Bulbasaur"),
                &["razorleaf"],
            ),
            species(
                "venusaur",
                "Venusaur",
                &[Grass, Poison],
                Ou,
                Green,
                1,
                &["overgrow", "chlorophyll"],
                &[],
                Some("ivysaur"),
                Some("Bulbasaur"),
                &["solarbeam"],
            ),
            species(
                "charmander",
                "Charmander",
                &[Fire],
                Lc,
                Red,
                1,
                &["blaze", "solarpower"],
                &["charmeleon"],
                None,
                None,
                &["scratch", "ember"],
            ),
            species(
                "charmeleon",
                "Charmeleon",
                &[Fire],
                Nu,
                Red,
                1,
                &["blaze", "solarpower"],
                &["charizard"],
                Some("charmander"),
                Some("Charmander"),
                &[],
            ),
            species(
                "charizard",
                "Charizard",
                &[Fire, Flying],
                Nu,
                Red,
                1,
                &["blaze", "solarpower"],
                &[],
                Some("charmeleon"),
                Some("Charmander"),
                &["flamethrower", "fly"],
            ),
            megax,
            species(
                "squirtle",
                "Squirtle",
                &[Water],
                Lc,
                Blue,
                1,
                &["torrent"],
                &["wartortle"],
                None,
                None,
                &["tackle", "watergun"],
            ),
            species(
                "wartortle",
                "Wartortle",
                &[Water],
                Nu,
                Blue,
                1,
                &["torrent"],
                &["blastoise"],
                Some("squirtle"),
                Some("Squirtle"),
                &[],
            ),
            species(
                "blastoise",
                "Blastoise",
                &[Water],
                Uu,
                Blue,
                1,
                &["torrent"],
                &[],
                Some("wartortle"),
                Some("Squirtle"),
                &["surf"],
            ),
            species(
                "pichu",
                "Pichu",
                &[Electric],
                Lc,
                Yellow,
                2,
                &["static", "lightningrod"],
                &["pikachu"],
                None,
                None,
                &["tackle"],
            ),
            species(
                "pikachu",
                "Pikachu",
                &[Electric],
                Nu,
                Yellow,
                1,
                &["static", "lightningrod"],
                &["raichu"],
                Some("pichu"),
                Some("Pichu"),
                &["thunderbolt"],
            ),
            species(
                "raichu",
                "Raichu",
                &[Electric],
                Uu,
                Yellow,
                1,
                &["static"],
                &[],
                Some("pikachu"),
                Some("Pichu"),
                &[],
            ),
            species(
                "scyther",
                "Scyther",
                &[Bug, Flying],
                Uu,
                Green,
                1,
                &["swarm", "technician"],
                &["scizor"],
                None,
                None,
                &["swordsdance"],
            ),
            species(
                "scizor",
                "Scizor",
                &[Bug, Steel],
                Ou,
                Red,
                2,
                &["swarm", "technician"],
                &[],
                Some("scyther"),
                Some("Scyther"),
                &["irondefense"],
            ),
            species(
                "onix",
                "Onix",
                &[Rock, Ground],
                Nu,
                Gray,
                1,
                &["sturdy"],
                &["steelix"],
                None,
                None,
                &["tackle"],
            ),
            species(
                "steelix",
                "Steelix",
                &[Steel, Ground],
                Uu,
                Gray,
                2,
                &["sturdy"],
                &[],
                Some("onix"),
                Some("Onix"),
                &["irondefense"],
            ),
            species(
                "smeargle",
                "Smeargle",
                &[Normal],
                Nu,
                White,
                2,
                &["owntempo"],
                &[],
                None,
                None,
                &["sketch"],
            ),
            species(
                "ditto",
                "Ditto",
                &[Normal],
                Lc,
                Purple,
                1,
                &["limber"],
                &[],
                None,
                None,
                &[],
            ),
            species(
                "syclant",
                "Syclant",
                &[Ice, Bug],
                Cap,
                Blue,
                4,
                &["compoundeyes"],
                &[],
                None,
                None,
                &[],
            ),
            species(
                "hoopa",
                "Hoopa",
                &[Psychic, Ghost],
                Unreleased,
                Purple,
                6,
                &["magician"],
                &[],
                None,
                None,
                &[],
            ),
            species(
                "missingno",
                "Missingno",
                &[Normal],
                Illegal,
                Gray,
                1,
                &[],
                &[],
                None,
                None,
                &[],
            ),
        ];

        let moves = vec![
            named("tackle", "Tackle"),
            named("growl", "Growl"),
            named("vinewhip", "Vine Whip"),
            named("razorleaf", "Razor Leaf"),
            named("solarbeam", "Solar Beam"),
            named("scratch", "Scratch"),
            named("ember", "Ember"),
            named("flamethrower", "Flamethrower"),
            named("fly", "Fly"),
            named("dragonclaw", "Dragon Claw"),
            named("watergun", "Water Gun"),
            named("surf", "Surf"),
            named("thunderbolt", "Thunderbolt"),
            named("swordsdance", "Swords Dance"),
            named("irondefense", "Iron Defense"),
            named("sketch", "Sketch"),
            named("chatter", "Chatter"),
        ];

        let abilities = vec![
            ability("overgrow", "Overgrow"),
            ability("chlorophyll", "Chlorophyll"),
            ability("blaze", "Blaze"),
            ability("solarpower", "Solar Power"),
            ability("toughclaws", "Tough Claws"),
            ability("torrent", "Torrent"),
            ability("static", "Static"),
            ability("lightningrod", "Lightning Rod"),
            ability("swarm", "Swarm"),
            ability("technician", "Technician"),
            ability("sturdy", "Sturdy"),
            ability("owntempo", "Own Tempo"),
            ability("limber", "Limber"),
            ability("compoundeyes", "Compound Eyes"),
            ability("magician", "Magician"),
            ability("swiftswim", "Swift Swim"),
        ];

        Pokedex::new(
            species_list,
            moves,
            abilities,
            vec!["scyther".to_string()],
        )
    }
}
