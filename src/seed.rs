//! Built-in seed data: the initial staff list written to an empty slot,
//! and the fixed specialty list offered by the filter dropdown.

use serde_json::Map;

use crate::models::Profile;

pub const SPECIALTIES: &[&str] = &[
    "Cardiología",
    "Clínica Médica",
    "Dermatología",
    "Ginecología",
    "Neurología",
    "Oftalmología",
    "Pediatría",
    "Traumatología",
];

struct SeedEntry {
    name: &'static str,
    specialty: &'static str,
    license: &'static str,
    photo: &'static str,
    bio: &'static str,
    fee: f64,
    plans: &'static [&'static str],
}

const STAFF: &[SeedEntry] = &[
    SeedEntry {
        name: "Dra. Lucía Ferreyra",
        specialty: "Cardiología",
        license: "MP 24518",
        photo: "img/medicos/ferreyra.jpg",
        bio: "Especialista en prevención cardiovascular y ecocardiografía.",
        fee: 18500.0,
        plans: &["OSDE", "Swiss Medical", "Galeno"],
    },
    SeedEntry {
        name: "Dr. Martín Acosta",
        specialty: "Clínica Médica",
        license: "MP 19877",
        photo: "img/medicos/acosta.jpg",
        bio: "Atención integral del adulto y control de enfermedades crónicas.",
        fee: 14000.0,
        plans: &["PAMI", "IOMA", "OSDE"],
    },
    SeedEntry {
        name: "Dra. Valeria Sosa",
        specialty: "Pediatría",
        license: "MP 30214",
        photo: "img/medicos/sosa.jpg",
        bio: "Controles de niño sano, vacunación y seguimiento del desarrollo.",
        fee: 15500.0,
        plans: &["Medifé", "Swiss Medical"],
    },
    SeedEntry {
        name: "Dr. Santiago Ríos",
        specialty: "Traumatología",
        license: "MP 27703",
        photo: "img/medicos/rios.jpg",
        bio: "Lesiones deportivas y cirugía artroscópica de rodilla.",
        fee: 21000.0,
        plans: &["OSDE", "Galeno"],
    },
    SeedEntry {
        name: "Dra. Carolina Méndez",
        specialty: "Dermatología",
        license: "MP 31590",
        photo: "img/medicos/mendez.jpg",
        bio: "Dermatología clínica, control de lunares y dermatoscopía.",
        fee: 16800.0,
        plans: &["Swiss Medical", "Medifé", "IOMA"],
    },
    SeedEntry {
        name: "Dr. Federico Luna",
        specialty: "Neurología",
        license: "MP 22461",
        photo: "img/medicos/luna.jpg",
        bio: "Cefaleas, epilepsia y trastornos del sueño.",
        fee: 19900.0,
        plans: &["OSDE"],
    },
    SeedEntry {
        name: "Dra. Paula Giménez",
        specialty: "Ginecología",
        license: "MP 28836",
        photo: "img/medicos/gimenez.jpg",
        bio: "Salud de la mujer, control anual y colposcopía.",
        fee: 17200.0,
        plans: &["Galeno", "PAMI", "Medifé"],
    },
    SeedEntry {
        name: "Dr. Tomás Herrera",
        specialty: "Oftalmología",
        license: "MP 25109",
        photo: "img/medicos/herrera.jpg",
        bio: "Fondo de ojo, glaucoma y adaptación de lentes de contacto.",
        fee: 16000.0,
        plans: &["IOMA", "OSDE", "Swiss Medical"],
    },
];

/// Profiles written to storage the first time the slot is found empty.
pub fn seed_profiles() -> Vec<Profile> {
    STAFF
        .iter()
        .map(|s| Profile {
            name: Some(s.name.to_string()),
            specialty: Some(s.specialty.to_string()),
            license: Some(s.license.to_string()),
            photo: Some(s.photo.to_string()),
            bio: Some(s.bio.to_string()),
            fee: s.fee,
            accepted_plans: s.plans.iter().map(|p| p.to_string()).collect(),
            extra: Map::new(),
        })
        .collect()
}
