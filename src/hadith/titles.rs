//! Chapter title lookup tables
//!
//! Display titles are not carried by the data files; they come from these
//! fixed tables, with a generic "Chapitre N" / "الباب N" fallback for ids
//! outside the tables.

/// French chapter titles, indexed by chapter id
const CHAPTER_TITLES: &[(u32, &str)] = &[
    (1, "Révélation"),
    (2, "Foi"),
    (3, "Connaissance"),
    (4, "Ablutions"),
    (5, "Bain rituel"),
    (6, "Menstruation"),
    (7, "Tayammum"),
    (8, "Prière"),
    (9, "Heures de prière"),
    (10, "Appel à la prière"),
    (11, "Prière du vendredi"),
    (12, "Prière de la peur"),
    (13, "Prières des deux fêtes"),
    (14, "Prière impaire"),
    (15, "Prière de demande de pluie"),
    (16, "Éclipse"),
    (17, "Prosternation"),
    (18, "Raccourcissement de la prière"),
    (19, "Prière de nuit"),
    (20, "Actions pendant la prière"),
    (21, "Funérailles"),
    (22, "Zakat"),
    (23, "Jeûne"),
    (24, "Prière de nuit pendant le Ramadan"),
    (25, "Retraite spirituelle"),
    (26, "Pèlerinage"),
    (27, "Omra"),
    (28, "Pèlerinage interdit"),
    (29, "Pénalités de chasse"),
    (30, "Vertus de Médine"),
    (31, "Expéditions"),
    (32, "Cinquième du butin"),
    (33, "Tributs"),
    (34, "Ventes"),
    (35, "Salaam"),
    (36, "Prêts"),
    (37, "Litiges"),
    (38, "Objets trouvés"),
    (39, "Irrigation"),
    (40, "Prêts"),
    (41, "Représentation"),
    (42, "Partenariat"),
    (43, "Hypothèque"),
    (44, "Affranchissement"),
    (45, "Cadeaux"),
    (46, "Témoignage"),
    (47, "Réconciliation"),
    (48, "Conditions"),
    (49, "Testaments"),
    (50, "Combats"),
    (51, "Révolution"),
    (52, "Sang-argent"),
    (53, "Loi du talion"),
    (54, "Contrainte"),
    (55, "Ruses"),
    (56, "Interprétation des rêves"),
    (57, "Conditions"),
    (58, "Serments et vœux"),
    (59, "Expiation des serments"),
    (60, "Héritage"),
    (61, "Limites légales"),
    (62, "Crimes"),
    (63, "Apostasie"),
    (64, "Contrainte"),
    (65, "Messagers"),
    (66, "Vertus du Coran"),
    (67, "Mariage"),
    (68, "Divorce"),
    (69, "Soutien"),
    (70, "Nourriture"),
    (71, "Sacrifice"),
    (72, "Boissons"),
    (73, "Patients"),
    (74, "Médecine"),
    (75, "Vêtements"),
    (76, "Bonnes manières"),
    (77, "Demande de permission"),
    (78, "Invocations"),
    (79, "Repentir"),
    (80, "Riqaq"),
    (81, "Unité"),
    (82, "Troubles"),
    (83, "Jugements"),
    (84, "Souhaits"),
    (85, "Sang-argent"),
    (86, "Loi du talion"),
    (87, "Interprétation"),
    (88, "Troubles"),
    (89, "Jugements"),
    (90, "Souhaits"),
    (91, "Accepter les informations"),
    (92, "S'en tenir au Livre et à la Sunna"),
    (93, "Unité"),
    (94, "Troubles"),
    (95, "Jugements"),
    (96, "Souhaits"),
    (97, "Unité"),
];

/// Arabic chapter titles for the first thirty chapters
const CHAPTER_ARABIC_TITLES: &[(u32, &str)] = &[
    (1, "بدء الوحي"),
    (2, "الإيمان"),
    (3, "العلم"),
    (4, "الوضوء"),
    (5, "الغسل"),
    (6, "الحيض"),
    (7, "التيمم"),
    (8, "الصلاة"),
    (9, "مواقيت الصلاة"),
    (10, "الأذان"),
    (11, "الجمعة"),
    (12, "صلاة الخوف"),
    (13, "العيدين"),
    (14, "الوتر"),
    (15, "الاستسقاء"),
    (16, "الكسوف"),
    (17, "السجود"),
    (18, "تقصير الصلاة"),
    (19, "التهجد"),
    (20, "العمل في الصلاة"),
    (21, "الجنائز"),
    (22, "الزكاة"),
    (23, "الصوم"),
    (24, "قيام رمضان"),
    (25, "الاعتكاف"),
    (26, "الحج"),
    (27, "العمرة"),
    (28, "المحصر"),
    (29, "جزاء الصيد"),
    (30, "فضائل المدينة"),
];

/// French title for a chapter id
pub fn chapter_title(chapter_id: u32) -> String {
    CHAPTER_TITLES
        .iter()
        .find(|(id, _)| *id == chapter_id)
        .map(|(_, title)| title.to_string())
        .unwrap_or_else(|| format!("Chapitre {}", chapter_id))
}

/// Arabic title for a chapter id
pub fn chapter_arabic_title(chapter_id: u32) -> String {
    CHAPTER_ARABIC_TITLES
        .iter()
        .find(|(id, _)| *id == chapter_id)
        .map(|(_, title)| title.to_string())
        .unwrap_or_else(|| format!("الباب {}", chapter_id))
}
