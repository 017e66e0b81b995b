use stunting_model::RiskLevel;

const HIGH: &[&str] = &[
    "Konsultasi ke tenaga kesehatan atau puskesmas terdekat untuk pemeriksaan lanjutan.",
    "Lakukan penimbangan berat badan dan pengukuran tinggi badan setiap bulan.",
    "Perbaiki asupan gizi harian dengan menambahkan sumber protein (telur, ikan, daging), zat besi, dan zinc.",
    "Pastikan balita mendapatkan ASI atau susu sesuai usia dan kebutuhan gizi.",
    "Jaga kebersihan lingkungan, air minum, dan sanitasi untuk mencegah infeksi berulang.",
    "Ikuti kegiatan posyandu secara rutin untuk pemantauan tumbuh kembang.",
];

const MEDIUM: &[&str] = &[
    "Tingkatkan kualitas pola makan dengan menu bergizi seimbang setiap hari.",
    "Pastikan jadwal imunisasi balita lengkap dan tepat waktu.",
    "Pantau berat dan tinggi badan minimal setiap 2 - 3 bulan.",
    "Kurangi risiko infeksi dengan menjaga kebersihan diri dan lingkungan rumah.",
    "Berikan makanan tambahan jika diperlukan sesuai anjuran tenaga kesehatan.",
];

const LOW: &[&str] = &[
    "Pertahankan pola makan sehat dan bergizi seimbang sesuai usia balita.",
    "Lanjutkan pemantauan pertumbuhan secara rutin di posyandu atau fasilitas kesehatan.",
    "Pastikan kebersihan lingkungan tetap terjaga.",
    "Tetap berikan stimulasi dan perhatian terhadap tumbuh kembang balita.",
];

/// Recommended follow-up actions for a risk level, most urgent first.
pub fn advice_for(risk: RiskLevel) -> &'static [&'static str] {
    match risk {
        RiskLevel::Tinggi => HIGH,
        RiskLevel::Sedang => MEDIUM,
        RiskLevel::Rendah => LOW,
    }
}
