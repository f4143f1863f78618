//! Program descriptions and study tips shown next to each recommendation.

/// Program description table, checked in order against the program name.
const PROGRAM_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "Informatika",
        "Mempelajari pengembangan software, teknologi jaringan, dan komputasi cerdas.",
    ),
    (
        "Sistem Informasi",
        "Menggabungkan ilmu komputer dengan manajemen bisnis untuk sistem perusahaan.",
    ),
    (
        "Manajemen",
        "Fokus pada pengelolaan bisnis, strategi pemasaran, dan kepemimpinan.",
    ),
    (
        "Akuntansi",
        "Ahli dalam pencatatan, analisis, dan pelaporan keuangan bisnis.",
    ),
    (
        "Ilmu Komunikasi",
        "Strategi penyampaian pesan efektif melalui media digital dan humas.",
    ),
    (
        "Hospitality dan Pariwisata",
        "Menyiapkan profesional perhotelan, kuliner, dan manajemen wisata.",
    ),
    (
        "Desain Komunikasi Visual",
        "Solusi komunikasi visual yang kreatif, artistik, dan inovatif.",
    ),
    (
        "Bahasa Inggris",
        "Komunikasi profesional global melalui bahasa dan budaya.",
    ),
    (
        "Bahasa Mandarin",
        "Bahasa dan budaya Tiongkok untuk bisnis internasional.",
    ),
    ("Bisnis Digital", "Teknologi digital dalam strategi bisnis modern."),
    (
        "Data Science",
        "Mengolah Big Data menjadi wawasan untuk prediksi.",
    ),
    ("Psikologi", "Mempelajari perilaku manusia dan proses mental."),
];

const DEFAULT_PROGRAM_DESCRIPTION: &str = "Jurusan unggulan pencetak profesional handal.";

/// Describe a study program.
///
/// The first table key contained in `program_name` wins, so "Informatika"
/// also describes "Sistem Informatika Bisnis".
#[must_use]
pub fn program_description(program_name: &str) -> &'static str {
    PROGRAM_DESCRIPTIONS
        .iter()
        .find(|(key, _)| program_name.contains(key))
        .map_or(DEFAULT_PROGRAM_DESCRIPTION, |(_, desc)| *desc)
}

/// Tip categories, checked in order against the lower-cased course name.
const COURSE_TIPS: &[(&[&str], &str)] = &[
    (
        &["matematika", "statistik", "akuntansi", "keuangan"],
        "Pahami konsep dasar, jangan cuma hafal rumus. Latihan soal kuncinya!",
    ),
    (
        &["coding", "algoritma", "data", "web"],
        "Praktek langsung (ngoding) lebih efektif daripada baca teori. Jangan takut error!",
    ),
    (
        &["desain", "gambar", "art", "sketsa"],
        "Perbanyak lihat referensi (Pinterest/Behance) dan bangun portofolio.",
    ),
    (
        &["bisnis", "manajemen", "marketing"],
        "Pelajari studi kasus nyata perusahaan dan latih skill presentasi.",
    ),
];

const DEFAULT_COURSE_TIP: &str = "Catat poin penting dosen dan aktif bertanya di kelas.";

/// Study tip for a course.
#[must_use]
pub fn course_tip(course_name: &str) -> &'static str {
    let lower = course_name.to_lowercase();
    COURSE_TIPS
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| lower.contains(t)))
        .map_or(DEFAULT_COURSE_TIP, |(_, tip)| *tip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_known_program() {
        assert_eq!(
            program_description("Psikologi"),
            "Mempelajari perilaku manusia dan proses mental."
        );
    }

    #[test]
    fn first_contained_key_wins() {
        // "Sistem Informasi" does not contain "Informatika".
        assert!(program_description("Sistem Informasi").starts_with("Menggabungkan"));
        // "Manajemen" is listed before "Hospitality dan Pariwisata".
        assert!(
            program_description("Manajemen Hospitality dan Pariwisata").starts_with("Fokus")
        );
    }

    #[test]
    fn unknown_program_gets_default() {
        assert_eq!(program_description("Teknik Sipil"), DEFAULT_PROGRAM_DESCRIPTION);
    }

    #[test]
    fn tips_follow_category_order() {
        assert!(course_tip("Statistika Bisnis").starts_with("Pahami"));
        assert!(course_tip("Basis Data").starts_with("Praktek"));
        assert!(course_tip("Sketsa Dasar").starts_with("Perbanyak"));
        assert!(course_tip("Manajemen Operasional").starts_with("Pelajari"));
        assert_eq!(course_tip("Pancasila"), DEFAULT_COURSE_TIP);
    }
}
