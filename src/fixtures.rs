//! Seed data for the in-memory store

use crate::models::{MatchRecord, Message, Profile, SkillLevel, SportSkill};
use chrono::{Duration, Utc};

pub const CURRENT_USER_ID: &str = "current-user";

fn skill(sport: &str, level: SkillLevel) -> SportSkill {
    SportSkill::new(sport, Some(level))
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: &str,
    name: &str,
    age: u8,
    location: &str,
    bio: &str,
    sports: Vec<SportSkill>,
    distance: f64,
    picture: &str,
) -> Profile {
    Profile {
        id: id.to_string(),
        name: name.to_string(),
        age,
        location: location.to_string(),
        bio: bio.to_string(),
        sports,
        distance,
        profile_picture: picture.to_string(),
    }
}

/// The signed-in user's own profile
pub fn current_user() -> Profile {
    profile(
        CURRENT_USER_ID,
        "Tomás Fernández",
        26,
        "Belgrano, CABA",
        "Estudiante de educación física. Me gusta entrenar en el gimnasio y jugar al tenis. \
         Busco compañeros para actividades al aire libre y para mejorar mi técnica en deportes de raqueta.",
        vec![
            SportSkill::new("Tenis", None),
            SportSkill::new("Gimnasio", None),
            SportSkill::new("Natación", None),
            SportSkill::new("Pádel", None),
        ],
        0.0,
        "/images/profile2.png",
    )
}

/// Candidate profiles, in queue order
pub fn profiles() -> Vec<Profile> {
    use SkillLevel::*;

    vec![
        profile(
            "1",
            "Mauro Brero",
            28,
            "Palermo",
            "Fanático del fútbol y jugador de Boca Juniors amateur. Busco compañeros para jugar \
             los fines de semana en las canchas de Palermo. También me gusta correr por los bosques.",
            vec![skill("Fútbol", Advanced), skill("Running", Intermediate), skill("Tenis", Beginner)],
            2.5,
            "/images/profile1.png",
        ),
        profile(
            "2",
            "Damian Dalla Vía",
            26,
            "Belgrano",
            "Estudiante de educación física. Me gusta entrenar en el gimnasio y jugar al tenis. \
             Busco compañeros para actividades al aire libre y para mejorar mi técnica en tenis.",
            vec![skill("Tenis", Advanced), skill("Gimnasio", Intermediate), skill("Natación", Beginner)],
            3.8,
            "/images/profile2.png",
        ),
        profile(
            "3",
            "Elias Ojeda",
            25,
            "Recoleta",
            "Apasionado del básquet y el running. Entreno 4 veces por semana y busco compañeros \
             para motivarnos mutuamente. Me encanta la competencia sana y superarme día a día.",
            vec![skill("Básquet", Advanced), skill("Running", Intermediate), skill("Ciclismo", Beginner)],
            1.7,
            "/images/profile3.png",
        ),
        profile(
            "4",
            "Tomas Brusco",
            22,
            "Núñez",
            "Entrenador personal y amante del fitness. Busco compañeros para entrenar en el \
             gimnasio o hacer actividades al aire libre. Puedo ofrecer consejos sobre nutrición y entrenamiento.",
            vec![skill("Gimnasio", Advanced), skill("Crossfit", Intermediate), skill("Funcional", Advanced)],
            4.2,
            "/images/profile4.png",
        ),
        profile(
            "5",
            "Santiago López",
            28,
            "Caballito",
            "Jugador de pádel nivel intermedio. También disfruto del ciclismo los fines de semana \
             por los bosques de Palermo. Busco gente con buena onda para compartir deportes y quizás un mate después.",
            vec![skill("Pádel", Intermediate), skill("Ciclismo", Intermediate), skill("Natación", Beginner)],
            5.1,
            "/images/profile5.jpeg",
        ),
        profile(
            "6",
            "Martín Acosta",
            29,
            "Villa Urquiza",
            "Jugador de básquet de toda la vida. Busco equipo para jugar los domingos por la mañana \
             o compañeros para entrenar. Nivel intermedio-avanzado, pero abierto a jugar con todos.",
            vec![skill("Básquet", Advanced), skill("Fútbol", Intermediate), skill("Running", Beginner)],
            6.3,
            "/images/profile3.png",
        ),
        profile(
            "7",
            "Lucas Giménez",
            24,
            "Villa Crespo",
            "Apasionado del fútbol desde chico. Juego como mediocampista y busco un equipo para \
             partidos semanales. También me gusta el entrenamiento funcional y correr por las mañanas.",
            vec![skill("Fútbol", Advanced), skill("Funcional", Intermediate), skill("Running", Intermediate)],
            3.2,
            "/images/profile1.png",
        ),
    ]
}

pub fn matches() -> Vec<MatchRecord> {
    let now = Utc::now();
    vec![
        MatchRecord {
            id: "1".to_string(),
            user1_id: CURRENT_USER_ID.to_string(),
            user2_id: "1".to_string(),
            timestamp: now,
            has_chat: true,
        },
        MatchRecord {
            id: "2".to_string(),
            user1_id: CURRENT_USER_ID.to_string(),
            user2_id: "3".to_string(),
            timestamp: now,
            has_chat: true,
        },
    ]
}

pub fn messages() -> Vec<Message> {
    let now = Utc::now();
    let message = |id: &str, match_id: &str, sender: &str, receiver: &str, content: &str, secs_ago: i64, read: bool| {
        Message {
            id: id.to_string(),
            match_id: match_id.to_string(),
            sender_id: sender.to_string(),
            receiver_id: receiver.to_string(),
            content: content.to_string(),
            timestamp: now - Duration::seconds(secs_ago),
            read,
        }
    };

    vec![
        message("1", "1", CURRENT_USER_ID, "1",
            "Hola! Vi que te gusta jugar al fútbol. ¿Te gustaría jugar este fin de semana?", 3600, true),
        message("2", "1", "1", CURRENT_USER_ID,
            "¡Hola! Sí, me encantaría. ¿Dónde jugaríamos?", 3500, true),
        message("3", "1", CURRENT_USER_ID, "1",
            "Estaba pensando en las canchas de Palermo, cerca del lago. ¿Te queda bien?", 3400, true),
        message("4", "1", "1", CURRENT_USER_ID,
            "Perfecto, me queda muy bien. ¿A qué hora?", 3300, true),
        message("5", "2", CURRENT_USER_ID, "3",
            "Hola Elias! Vi que te gusta el básquet. Yo también juego. ¿Te gustaría entrenar juntos algún día?", 2600, true),
        message("6", "2", "3", CURRENT_USER_ID,
            "¡Hola! Claro, me encantaría. ¿Dónde sueles entrenar?", 2500, false),
    ]
}
