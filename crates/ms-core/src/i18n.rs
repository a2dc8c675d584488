//! Static copy lookup

use ahash::AHashMap;
use once_cell::sync::Lazy;

use crate::session::Language;

const EN: &[(&str, &str)] = &[
    ("home", "Home"),
    ("events", "Events"),
    ("about", "About"),
    ("login", "Login"),
    ("register", "Register"),
    ("logout", "Logout"),
    ("profile", "Profile"),
    ("preferences", "Preferences"),
    ("language", "Language"),
    ("theme_label", "Dark mode"),
    ("backToHome", "Back to home"),
    ("backToLogin", "Back to login"),
    ("heroTitle", "Medical events across Algeria"),
    ("heroSub", "Conferences, symposia, workshops and webinars for health professionals."),
    ("search", "Search"),
    ("searchPlaceholder", "Search by title, specialty or city..."),
    ("specialties", "Browse by specialty"),
    ("allTypes", "All"),
    ("upcomingEvents", "Upcoming events"),
    ("activeSearch", "Active search"),
    ("seeMoreEvents", "See more events"),
    ("allEvents", "All events"),
    ("allEventsSub", "The complete directory of medical events."),
    ("upcoming", "Upcoming"),
    ("archived", "Archived"),
    ("noMatches", "No matching events"),
    ("noMatchesSub", "Try another keyword or clear the filters."),
    ("reset", "Reset filters"),
    ("directoryCtaTitle", "Take part in the community"),
    ("directoryCtaSub", "Organise an event, submit your work or join as a participant."),
    ("createYours", "Create yours"),
    ("submitWork", "Submit work"),
    ("joinUs", "Join us"),
    ("participants", "participants"),
    ("viewDetails", "View details"),
    ("secureSpot", "Secure your spot"),
    ("date", "Date"),
    ("location", "Location"),
    ("theme", "Theme"),
    ("description", "Description"),
    ("speakers", "Speakers"),
    ("committee", "Scientific committee"),
    ("sessions", "Programme"),
    ("contactInfo", "Contact"),
    ("brochure", "Download brochure"),
    ("close", "Close"),
    ("authorRequired", "An author account is required to submit scientific work."),
    ("loginRequired", "Please sign in to continue."),
    ("loginSubtitle", "Access your scientific space."),
    ("registerSubtitle", "Create your professional account."),
    ("resetPassword", "Reset password"),
    ("forgotPassword", "Forgot password?"),
    ("resetSent", "If an account exists, a reset link has been sent."),
    ("email", "Email"),
    ("password", "Password"),
    ("fullName", "Full name"),
    ("bioPlaceholder", "Short biography"),
    ("uploadPhoto", "Photo URL"),
    ("signingIn", "Signing in..."),
    ("cancel", "Cancel"),
    ("role_Organizer", "Organizer"),
    ("role_Author", "Author"),
    ("role_Participant", "Participant"),
    ("role_WorkshopAnimator", "Workshop animator"),
    ("profileSub", "Manage your public academic profile."),
    ("institution", "Institution"),
    ("researchField", "Research field"),
    ("biography", "Biography"),
    ("profilePermissions", "Your role determines which actions are available to you."),
    ("saved", "Saved"),
    ("saveProfile", "Save profile"),
    ("aboutTitle", "About MedSymposium"),
    ("aboutBody", "MedSymposium gathers the medical events of the country in one directory."),
];

const FR: &[(&str, &str)] = &[
    ("home", "Accueil"),
    ("events", "Événements"),
    ("about", "À propos"),
    ("login", "Connexion"),
    ("register", "Inscription"),
    ("logout", "Déconnexion"),
    ("profile", "Profil"),
    ("preferences", "Préférences"),
    ("language", "Langue"),
    ("theme_label", "Mode sombre"),
    ("backToHome", "Retour à l'accueil"),
    ("backToLogin", "Retour à la connexion"),
    ("heroTitle", "Les événements médicaux en Algérie"),
    ("heroSub", "Congrès, symposiums, ateliers et webinaires pour les professionnels de santé."),
    ("search", "Rechercher"),
    ("searchPlaceholder", "Rechercher par titre, spécialité ou ville..."),
    ("specialties", "Parcourir par spécialité"),
    ("allTypes", "Tous"),
    ("upcomingEvents", "Événements à venir"),
    ("activeSearch", "Recherche active"),
    ("seeMoreEvents", "Voir plus d'événements"),
    ("allEvents", "Tous les événements"),
    ("allEventsSub", "L'annuaire complet des événements médicaux."),
    ("upcoming", "À venir"),
    ("archived", "Archivés"),
    ("noMatches", "Aucun événement trouvé"),
    ("noMatchesSub", "Essayez un autre mot-clé ou réinitialisez les filtres."),
    ("reset", "Réinitialiser"),
    ("directoryCtaTitle", "Participez à la communauté"),
    ("directoryCtaSub", "Organisez un événement, soumettez vos travaux ou rejoignez-nous."),
    ("createYours", "Créer le vôtre"),
    ("submitWork", "Soumettre un travail"),
    ("joinUs", "Rejoignez-nous"),
    ("participants", "participants"),
    ("viewDetails", "Voir les détails"),
    ("secureSpot", "Réservez votre place"),
    ("date", "Date"),
    ("location", "Lieu"),
    ("theme", "Thème"),
    ("description", "Description"),
    ("speakers", "Intervenants"),
    ("committee", "Comité scientifique"),
    ("sessions", "Programme"),
    ("contactInfo", "Contact"),
    ("brochure", "Télécharger la brochure"),
    ("close", "Fermer"),
    ("authorRequired", "Un compte auteur est requis pour soumettre un travail scientifique."),
    ("loginRequired", "Veuillez vous connecter pour continuer."),
    ("loginSubtitle", "Accédez à votre espace scientifique."),
    ("registerSubtitle", "Créez votre compte professionnel."),
    ("resetPassword", "Réinitialiser le mot de passe"),
    ("forgotPassword", "Mot de passe oublié ?"),
    ("resetSent", "Si un compte existe, un lien de réinitialisation a été envoyé."),
    ("email", "E-mail"),
    ("password", "Mot de passe"),
    ("fullName", "Nom complet"),
    ("bioPlaceholder", "Courte biographie"),
    ("uploadPhoto", "URL de la photo"),
    ("signingIn", "Connexion..."),
    ("cancel", "Annuler"),
    ("role_Organizer", "Organisateur"),
    ("role_Author", "Auteur"),
    ("role_Participant", "Participant"),
    ("role_WorkshopAnimator", "Animateur d'atelier"),
    ("profileSub", "Gérez votre profil académique public."),
    ("institution", "Établissement"),
    ("researchField", "Domaine de recherche"),
    ("biography", "Biographie"),
    ("profilePermissions", "Votre rôle détermine les actions qui vous sont ouvertes."),
    ("saved", "Enregistré"),
    ("saveProfile", "Enregistrer le profil"),
    ("aboutTitle", "À propos de MedSymposium"),
    ("aboutBody", "MedSymposium réunit les événements médicaux du pays dans un seul annuaire."),
];

static TABLES: Lazy<[AHashMap<&'static str, &'static str>; 2]> = Lazy::new(|| {
    [
        EN.iter().copied().collect(),
        FR.iter().copied().collect(),
    ]
});

fn table(language: Language) -> &'static AHashMap<&'static str, &'static str> {
    match language {
        Language::En => &TABLES[0],
        Language::Fr => &TABLES[1],
    }
}

/// Copy for `key` in `language`, or `key` itself when no entry exists
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    table(language).get(key).copied().unwrap_or(key)
}
