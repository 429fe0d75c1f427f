pub mod filter;

use serde::{Deserialize, Serialize};

pub use filter::active_curriculum;

/// Lesson category. Closed set; aggregations iterate [`Category::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Technique,
    Theory,
    Repertoire,
    #[serde(rename = "Ear-Training")]
    EarTraining,
    Improvisation,
    Rhythm,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Technique,
        Category::Theory,
        Category::Repertoire,
        Category::EarTraining,
        Category::Improvisation,
        Category::Rhythm,
    ];

    /// Display label used by the app.
    pub fn label(self) -> &'static str {
        match self {
            Category::Technique => "Technique",
            Category::Theory => "Théorie",
            Category::Repertoire => "Répertoire",
            Category::EarTraining => "Oreille",
            Category::Improvisation => "Improvisation",
            Category::Rhythm => "Rythme",
        }
    }
}

/// One authored lesson. The title is its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub duration_minutes: u32,
    /// Only offered on basses with at least this many strings.
    pub min_strings: Option<u8>,
    /// Skipped when the learner already masters this skill.
    pub required_skill: Option<&'static str>,
}

impl LessonTemplate {
    pub const fn lesson(
        title: &'static str,
        category: Category,
        duration_minutes: u32,
        description: &'static str,
    ) -> Self {
        LessonTemplate {
            title,
            description,
            category,
            duration_minutes,
            min_strings: None,
            required_skill: None,
        }
    }

    pub const fn skill(mut self, key: &'static str) -> Self {
        self.required_skill = Some(key);
        self
    }

    pub const fn strings(mut self, min: u8) -> Self {
        self.min_strings = Some(min);
        self
    }
}

use Category::*;

static CATALOG: [LessonTemplate; 39] = [
    // Phase 1: fundamentals
    LessonTemplate::lesson("Posture & Main Droite", Technique, 15, "Position assise/debout, sangle. Alternance index/majeur stricte.").skill("holding_posture"),
    LessonTemplate::lesson("Muting Main Gauche", Technique, 15, "Utiliser les doigts inactifs pour étouffer les cordes."),
    LessonTemplate::lesson("Le Métronome: Temps 1 & 3", Rhythm, 20, "Jouer des noires. Sentir le click sur 1 et 3.").skill("rhythm"),
    LessonTemplate::lesson("Notes: Cordes à vide & Case 5", Theory, 10, "Relation entre la 5ème case et la corde suivante."),
    LessonTemplate::lesson("Technique de l'Araignée (Chromatique)", Technique, 20, "1 doigt par case. Focus sur l'indépendance."),
    LessonTemplate::lesson("Notes: Cases 0 à 5 (E & A)", Theory, 15, "Nommer et jouer les notes naturelles.").skill("notes_first_5_frets"),
    LessonTemplate::lesson("Raking (Main Droite)", Technique, 15, "Glisser le doigt d'une corde aiguë vers une grave.").skill("raking"),
    LessonTemplate::lesson("Groove: La note noire", Repertoire, 20, "Créer un groove simple en utilisant uniquement des noires."),
    LessonTemplate::lesson("Gamme Majeure (Doigté 1)", Theory, 20, "Pattern 1 (Majeur doigt 2).").skill("major_scale_shape"),
    LessonTemplate::lesson("Octaves", Technique, 15, "Forme géométrique de l'octave. Application disco/funk."),
    // Phase 2: intermediate techniques
    LessonTemplate::lesson("Hammer-on & Pull-off", Technique, 20, "Legato pour fluidifier le jeu.").skill("hammer_pull"),
    LessonTemplate::lesson("Subdivisions: Croches", Rhythm, 15, "Straight vs Shuffle feel."),
    LessonTemplate::lesson("Triades Majeures", Theory, 20, "R-3-5. Arpèges sur tout le manche."),
    LessonTemplate::lesson("Triades Mineures", Theory, 20, "R-b3-5. Comparaison avec Majeur."),
    LessonTemplate::lesson("Floating Thumb (5+ cordes)", Technique, 25, "Le pouce suit la main pour muter les graves.").strings(5).skill("floating_thumb"),
    LessonTemplate::lesson("Notes: Corde de Si Grave", Theory, 15, "Identifier les notes sous la 5ème case.").strings(5),
    LessonTemplate::lesson("Ghost Notes (Notes mortes)", Technique, 20, "Percussion main gauche. Le son 'Tchick'."),
    LessonTemplate::lesson("Gamme Pentatonique Mineure", Theory, 20, "La caisse à outils du rock et de la pop."),
    LessonTemplate::lesson("Slap: Le Thumb (Pouce)", Technique, 20, "Technique de rebond contre la frette.").skill("slap_basic"),
    LessonTemplate::lesson("Slap: Le Pop (Tir)", Technique, 20, "Tirer la corde (octaves) avec l'index.").skill("slap_basic"),
    LessonTemplate::lesson("Groove: Syncopes", Rhythm, 20, "Accentuer les 'et' (contre-temps)."),
    LessonTemplate::lesson("Slides (Glissés)", Technique, 15, "Glissés précis vers une note cible."),
    // Phase 3: advanced & musicality
    LessonTemplate::lesson("Modes: Dorien", Theory, 20, "La couleur mineure 'funky'. (R 2 b3 4 5 6 b7)"),
    LessonTemplate::lesson("Modes: Mixolydien", Theory, 20, "La couleur Dominante (Blues/Rock). (R 2 3 4 5 6 b7)"),
    LessonTemplate::lesson("Doublettes (16ème de notes)", Rhythm, 20, "Rocco Prestia style mute."),
    LessonTemplate::lesson("Accords: Shell Voicings", Theory, 25, "Jouer R-3-7 pour accompagner.").skill("chords"),
    LessonTemplate::lesson("Accords: Power Chords", Theory, 15, "R-5-R. Utilisation rock/metal."),
    LessonTemplate::lesson("Walking Bass: Approche Chromatique", Improvisation, 25, "Cibler les notes de l'accord par demi-ton."),
    LessonTemplate::lesson("Accords 6 cordes (Voicings C aiguë)", Theory, 25, "Accords riches avec la corde de Do.").strings(6),
    LessonTemplate::lesson("Tapping: Une main", Technique, 20, "Hammer-on depuis le néant.").skill("tapping"),
    LessonTemplate::lesson("Ear Training: 4te et 5te", EarTraining, 15, "Reconnaître les mouvements I-IV et I-V."),
    // Phase 4: virtuosity & integration
    LessonTemplate::lesson("Double Thumping (Victor Wooten)", Technique, 30, "Pouce aller-retour comme un médiator."),
    LessonTemplate::lesson("Sweeping Bass", Technique, 25, "Arpèges rapides sur plusieurs cordes."),
    LessonTemplate::lesson("Harmoniques Naturelles", Technique, 15, "Cases 5, 7, 12. Jaco style."),
    LessonTemplate::lesson("Soloing: Phrasé", Improvisation, 30, "Questions / Réponses. Laisser de l'espace."),
    LessonTemplate::lesson("Étude de Style: Motown", Repertoire, 30, "Analyse James Jamerson. Chromatisme."),
    LessonTemplate::lesson("Étude de Style: Reggae", Repertoire, 30, "Le 'One Drop'. Son lourd, peu de notes."),
    LessonTemplate::lesson("Palm Mute", Technique, 15, "Étouffer au chevalet pour un son vintage."),
    LessonTemplate::lesson("Analyse: Donna Lee (Intro)", Repertoire, 30, "Bebop head. Défi technique."),
];

/// The authored curriculum, in teaching order.
pub fn catalog() -> &'static [LessonTemplate] {
    &CATALOG
}

