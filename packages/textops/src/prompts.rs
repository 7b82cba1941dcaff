//! Prompt templates for the Indonesian academic writing tasks.
//!
//! Every template keeps the model's output contract explicit: plain rewritten
//! text for the rewriting tasks, a bare JSON object for the analysis tasks,
//! and a URL-or-token reply for the plagiarism probe.

use crate::types::{CitationKind, ParaphraseMode};

/// Reply token the plagiarism probe uses when no plausible source exists.
pub const NOT_FOUND_TOKEN: &str = "TIDAK_DITEMUKAN";

pub const PARAPHRASE_STANDARD: &str = "Tugas Anda adalah memparafrase teks berikut. Ubah struktur setiap kalimat secara signifikan dan ganti pilihan kata dengan sinonim yang relevan. Pastikan SEMUA makna dan detail informasi dari teks asli tetap utuh. JANGAN meringkas. HANYA berikan teks yang sudah diparafrase, tanpa kalimat pembuka, penjelasan, atau format tambahan.";

pub const PARAPHRASE_FORMAL: &str = "Anda adalah editor akademis. Parafrasekan teks berikut ke dalam gaya bahasa yang sangat formal dan objektif. Pertahankan semua detail informasi dengan presisi tinggi. HANYA berikan teks yang sudah diparafrase, tanpa kalimat pembuka, penjelasan, atau format tambahan.";

pub const PARAPHRASE_CREATIVE: &str = "Anda adalah seorang novelis. Ubah teks berikut menjadi narasi yang lebih hidup dan ekspresif. Pertahankan semua informasi inti, namun sajikan dengan kosakata yang kaya dan struktur kalimat yang menarik. HANYA berikan teks yang sudah diparafrase, tanpa kalimat pembuka, penjelasan, atau format tambahan.";

pub const PARAPHRASE_SIMPLE: &str = "Jelaskan kembali teks berikut dengan bahasa yang sangat sederhana. Pecah kalimat panjang menjadi kalimat-kalimat pendek dan ganti kata sulit dengan padanan umum, namun jangan sampai ada informasi yang hilang. HANYA berikan hasilnya.";

pub const PARAPHRASE_MAHASISWA: &str = "Anda adalah mahasiswa yang sedang menyusun skripsi. Parafrasekan teks berikut dengan gaya bahasa akademis. Fokus utama Anda adalah mengubah kalimat asli untuk menghindari plagiarisme dengan mengubah struktur kalimat dan menggunakan sinonim yang tepat. Pastikan semua data dan detail tetap ada. HANYA berikan hasilnya tanpa analisis.";

/// Prompt for the AI-detection analysis. Demands a bare JSON object.
pub const AI_DETECTION_PROMPT: &str = r#"Anda adalah seorang ahli analisis gaya penulisan. Teks berikut akan dianalisis untuk menentukan karakteristik gaya penulisan, khususnya dalam hal prediktabilitas, variasi struktur kalimat, dan sentuhan personal.

Teks untuk dianalisis:
---
{text}
---

Berikan analisis Anda dalam format JSON yang valid dan HANYA JSON saja. JSON harus memiliki empat kunci:
1. "predictability_score": Sebuah angka integer dari 0 (sangat tidak terduga/manusiawi) hingga 100 (sangat dapat diprediksi/AI).
2. "uniformity_score": Sebuah angka integer dari 0 (sangat bervariasi/manusiawi) hingga 100 (sangat seragam/AI).
3. "generality_score": Sebuah angka integer dari 0 (sangat spesifik/personal/manusiawi) hingga 100 (sangat umum/generik/AI).
4. "analysis_summary": Sebuah string singkat (maksimal 20 kata) yang menyimpulkan hasil analisis berdasarkan skor-skor tersebut.

Langsung berikan hanya objek JSON, tanpa penjelasan atau kata pengantar."#;

/// Prompt for the authenticity review of (possibly paraphrased) text.
pub const AUTHENTICITY_PROMPT: &str = r#"Anda adalah seorang peninjau dokumen yang bertugas menganalisis teks untuk keaslian dan keunikan gaya penulisan, terutama setelah teks tersebut mungkin telah diproses (misalnya, diparafrase). Identifikasi bagian atau kalimat dalam teks ini yang masih terdengar generik, kaku, atau sangat mirip dengan gaya AI.

Berikan analisis Anda dalam format JSON yang valid dan HANYA JSON saja. JSON harus memiliki tiga kunci:
1. "overall_impression": Sebuah string singkat (maksimal 20 kata) yang memberikan kesan keseluruhan tentang keaslian/keunikannya (contoh: "Teks terdengar cukup manusiawi.", "Ada beberapa bagian yang terasa kaku.").
2. "problematic_sentences": Sebuah array berisi string. Setiap string adalah kalimat LENGKAP dari teks asli yang paling kuat menunjukkan ciri-ciri kurang asli, generik, atau seperti AI. Jika tidak ada, kembalikan array kosong [].
3. "authenticity_score": Sebuah angka integer dari 0 (sangat generik/AI-ish) hingga 100 (sangat unik/manusiawi).

Teks untuk dianalisis:
---
{text}
---

Langsung berikan hanya objek JSON, tanpa penjelasan atau kata pengantar."#;

/// Prompt for rewriting robotic text into natural prose.
pub const HUMANIZE_PROMPT: &str = r#"Anda adalah seorang penulis dan editor ahli yang bertugas mengubah teks yang terdengar robotik dan kaku menjadi tulisan yang mengalir alami seperti ditulis oleh manusia.
Tugas utama Anda adalah "humanize" teks berikut. Lakukan ini dengan cara:
1. **Variasikan Struktur Kalimat:** Ubah kalimat-kalimat yang monoton. Gabungkan kalimat pendek atau pecah kalimat yang terlalu panjang. Gunakan berbagai jenis klausa.
2. **Perkaya Pilihan Kata:** Ganti kata-kata yang terlalu formal, teknis, atau generik dengan sinonim yang lebih umum dan natural.
3. **Tambahkan "Sentuhan Manusia":** Gunakan kata-kata transisi yang lebih luwes, sisipkan sedikit idiom umum (jika sesuai), dan buat ritme tulisan menjadi lebih nyaman dibaca.
4. **PENTING:** Jangan mengubah makna inti, fakta, atau data dari teks asli.

Teks AI yang akan di-humanize:
---
{text}
---

HANYA berikan teks yang sudah di-humanize. Jangan berikan komentar, penjelasan, atau kata pembuka apa pun."#;

/// Prompt for spelling, grammar, and abbreviation expansion.
pub const CORRECTION_PROMPT: &str = r#"Anda adalah asisten koreksi teks profesional. Tugas Anda adalah:
1. **Memperbaiki Typo dan Kesalahan Ejaan:** Identifikasi dan koreksi semua salah ketik, kesalahan ejaan, dan kesalahan tata bahasa dasar.
2. **Mengembangkan Singkatan:** Ganti singkatan umum dengan bentuk panjangnya yang lengkap. Contoh: "UU" menjadi "Undang-Undang", "DPR" menjadi "Dewan Perwakilan Rakyat", "SDM" menjadi "Sumber Daya Manusia", "PT" menjadi "Perseroan Terbatas", "dll" menjadi "dan lain-lain", "dsb" menjadi "dan sebagainya". Gunakan konteks untuk memutuskan singkatan mana yang harus dikembangkan.
3. **Mempertahankan Makna Asli:** Pastikan makna, konteks, dan gaya asli teks tidak berubah secara substansial, kecuali untuk perbaikan yang diperlukan.
4. **Hanya Berikan Teks yang Sudah Diperbaiki:** Jangan tambahkan komentar, penjelasan, atau kalimat pembuka/penutup. Langsung berikan teks hasil koreksi.

Teks yang perlu dikoreksi:
---
{text}
---"#;

/// Prompt asking the model to act as a search engine for one sentence.
pub const PLAGIARISM_PROBE_PROMPT: &str = r#"Anda adalah sebuah mesin pencari. Saya akan memberikan sebuah kalimat. Jika kalimat ini terlihat sangat umum atau mungkin ada di sebuah artikel online, berikan satu contoh URL sumber yang paling relevan. Jika kalimatnya terlihat sangat unik dan spesifik, jawab dengan "TIDAK_DITEMUKAN".
JANGAN berikan penjelasan. Hanya berikan URL atau kata "TIDAK_DITEMUKAN".

Kalimat: "{sentence}""#;

/// Shared bibliography instructions for every citation kind.
pub const CITATION_BASE_INSTRUCTIONS: &str = r#"Anda adalah seorang spesialis daftar pustaka yang sangat teliti dan akurat dalam pemformatan.
Tugas Anda adalah membaca informasi dokumen yang saya berikan (baik dari file yang diunggah atau teks yang ditempel), mengidentifikasi elemen-elemen kunci (penulis, tahun, judul, publikasi, dll.), dan memformatnya menjadi sitasi standar seperti pada umumnya (mirip APA Style, tapi mengikuti contoh yang diberikan).

**Fokuslah untuk MENGIDENTIFIKASI dan MENGGUNAKAN data yang DITEMUKAN dalam dokumen/teks ini untuk akurasi data. Dokumen/teks ini adalah SUMBER UTAMA.**

**Sertakan tag HTML <i> atau <em> untuk memiringkan teks yang diperlukan.**

**ATURAN MUTLAK:**
- HANYA berikan teks sitasi yang sudah diformat. JANGAN berikan komentar, penjelasan, atau teks pengantar/penutup lainnya.
- **JANGAN PERNAH menyertakan URL/link dari mana pun di hasil akhir sitasi.**
- Jika suatu detail tidak dapat diidentifikasi dari dokumen/teks, biarkan bagian tersebut kosong (contoh: jika tidak ada volume jurnal, jangan menulis "volume", cukup lewati). Jangan membuat informasi fiktif atau menebak."#;

pub const CITATION_JURNAL_EXAMPLE: &str = r#"Format sitasi jurnal PERSIS seperti contoh ini, termasuk penggunaan tanda baca, spasi, dan kapitalisasi.
Perhatikan pembalikan nama penulis dan pemiringan judul jurnal.

**Contoh Format Jurnal yang Diinginkan (Gaya Umum/APA-like):**
Ibrahim, A. (2004). Penyelesaian Sengketa Tanah Kawasan Hutan Negara Di Kabupaten Lumajang. <i>Jurnal Hukum Argumentum</i>, 3(2), Januari-Juni 2004. Sekolah Tinggi Ilmu Hukum Jenderal Sudirman, Lumajang."#;

pub const CITATION_SKRIPSI_EXAMPLE: &str = r#"Format sitasi skripsi PERSIS seperti contoh ini, termasuk penggunaan tanda baca, spasi, dan kapitalisasi.
Perhatikan pembalikan nama penulis dan pemiringan jenis dokumen.

**Contoh Format Skripsi yang Diinginkan (Gaya Umum/APA-like):**
Jalil, A. (2007). Implementasi Asas Keterbukaan Dalam pembentukan Peraturan Daerah Di Kabupaten Lumajang. <i>Skripsi</i>. Sekolah Tinggi Ilmu Hukum Jenderal Sudirman Lumajang."#;

pub const CITATION_MAKALAH_EXAMPLE: &str = r#"Format sitasi makalah PERSIS seperti contoh ini, termasuk penggunaan tanda baca, spasi, dan kapitalisasi.
Perhatikan pembalikan nama penulis dan pemiringan jenis dokumen.

**Contoh Format Makalah yang Diinginkan (Gaya Umum/APA-like):**
Edward, F. (2002, September). Teknik Penyusunan Peraturan Perundang-undangan Tingkat Daerah. <i>Makalah</i>. Pendidikan dan Latihan Legal Drafting LAN, Jakarta."#;

pub const CITATION_GENERIC_EXAMPLE: &str =
    "Format daftar pustaka dari informasi yang diberikan dalam gaya umum.";

/// Pick the rewriting instruction for a paraphrase mode.
pub fn paraphrase_instruction(mode: ParaphraseMode) -> &'static str {
    match mode {
        ParaphraseMode::Standard => PARAPHRASE_STANDARD,
        ParaphraseMode::Formal => PARAPHRASE_FORMAL,
        ParaphraseMode::Creative => PARAPHRASE_CREATIVE,
        ParaphraseMode::Simple => PARAPHRASE_SIMPLE,
        ParaphraseMode::Mahasiswa => PARAPHRASE_MAHASISWA,
    }
}

/// Format the paraphrase prompt for a mode and source text.
pub fn format_paraphrase_prompt(mode: ParaphraseMode, text: &str) -> String {
    format!(
        "{}\n\nTeks Asli untuk diparafrase:\n---\n{}",
        paraphrase_instruction(mode),
        text
    )
}

/// Format the AI-detection prompt.
pub fn format_detection_prompt(text: &str) -> String {
    AI_DETECTION_PROMPT.replace("{text}", text)
}

/// Format the authenticity review prompt.
pub fn format_authenticity_prompt(text: &str) -> String {
    AUTHENTICITY_PROMPT.replace("{text}", text)
}

/// Format the humanize prompt.
pub fn format_humanize_prompt(text: &str) -> String {
    HUMANIZE_PROMPT.replace("{text}", text)
}

/// Format the text-correction prompt.
pub fn format_correction_prompt(text: &str) -> String {
    CORRECTION_PROMPT.replace("{text}", text)
}

/// Format the plagiarism probe prompt for a single sentence.
pub fn format_probe_prompt(sentence: &str) -> String {
    PLAGIARISM_PROBE_PROMPT.replace("{sentence}", sentence)
}

fn citation_example(kind: CitationKind) -> &'static str {
    match kind {
        CitationKind::Jurnal => CITATION_JURNAL_EXAMPLE,
        CitationKind::Skripsi => CITATION_SKRIPSI_EXAMPLE,
        CitationKind::Makalah => CITATION_MAKALAH_EXAMPLE,
        CitationKind::Other => CITATION_GENERIC_EXAMPLE,
    }
}

/// Format the citation prompt for a document kind.
///
/// When the source material is pasted text it is embedded ahead of the
/// instructions; uploaded files travel separately as inline document data.
pub fn format_citation_prompt(kind: CitationKind, pasted_text: Option<&str>) -> String {
    let instructions = format!("{}\n\n{}", CITATION_BASE_INSTRUCTIONS, citation_example(kind));
    match pasted_text {
        Some(text) => format!("{}\n\n{}", text, instructions),
        None => instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_paraphrase_prompt_embeds_text_after_instruction() {
        let formatted = format_paraphrase_prompt(ParaphraseMode::Formal, "Hukum itu tegas.");
        assert!(formatted.starts_with(PARAPHRASE_FORMAL));
        assert!(formatted.contains("Teks Asli untuk diparafrase:"));
        assert!(formatted.ends_with("Hukum itu tegas."));
    }

    #[test]
    fn test_paraphrase_instruction_varies_by_mode() {
        assert!(paraphrase_instruction(ParaphraseMode::Mahasiswa).contains("skripsi"));
        assert!(paraphrase_instruction(ParaphraseMode::Creative).contains("novelis"));
        assert_ne!(
            paraphrase_instruction(ParaphraseMode::Standard),
            paraphrase_instruction(ParaphraseMode::Simple)
        );
    }

    #[test]
    fn test_format_detection_prompt_lists_required_keys() {
        let formatted = format_detection_prompt("Contoh teks.");
        assert!(formatted.contains("Contoh teks."));
        assert!(formatted.contains("\"predictability_score\""));
        assert!(formatted.contains("\"uniformity_score\""));
        assert!(formatted.contains("\"generality_score\""));
        assert!(formatted.contains("\"analysis_summary\""));
        assert!(!formatted.contains("{text}"));
    }

    #[test]
    fn test_format_probe_prompt_quotes_sentence() {
        let formatted = format_probe_prompt("Air mendidih pada suhu seratus derajat.");
        assert!(formatted.contains("Kalimat: \"Air mendidih pada suhu seratus derajat.\""));
        assert!(formatted.contains(NOT_FOUND_TOKEN));
    }

    #[test]
    fn test_format_citation_prompt_selects_kind_example() {
        let jurnal = format_citation_prompt(CitationKind::Jurnal, None);
        assert!(jurnal.contains("Jurnal Hukum Argumentum"));

        let generic = format_citation_prompt(CitationKind::Other, None);
        assert!(generic.contains("gaya umum"));
        assert!(!generic.contains("Jurnal Hukum Argumentum"));
    }

    #[test]
    fn test_format_citation_prompt_embeds_pasted_text_first() {
        let formatted =
            format_citation_prompt(CitationKind::Skripsi, Some("Judul: Studi Kasus. 2019."));
        assert!(formatted.starts_with("Judul: Studi Kasus. 2019."));
        assert!(formatted.contains("spesialis daftar pustaka"));
        assert!(formatted.contains("<i>Skripsi</i>"));
    }
}
