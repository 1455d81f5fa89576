// src/noyau/nombre.rs
//
// Frontière texte <-> f64.
// - lecture permissive (préfixe numérique, façon parseFloat)
// - écriture "navigateur" (Number.prototype.toString, base 10)

/* ------------------------ Lecture ------------------------ */

/// Lit le plus long préfixe numérique de `s`.
///
/// - espaces de tête ignorés
/// - signe optionnel, puis `Infinity` ou `chiffres [. chiffres] [e[+-]chiffres]`
/// - au moins un chiffre dans la mantisse, sinon `None`
///
/// Ex: "12.5" -> 12.5 ; "5." -> 5 ; "1e+21" -> 1e21 ; "Error" -> None
pub fn lire_nombre(s: &str) -> Option<f64> {
    let chars: Vec<char> = s.trim_start().chars().collect();
    let mut i: usize = 0;

    let mut negatif = false;
    if let Some(&c) = chars.first() {
        if c == '+' || c == '-' {
            negatif = c == '-';
            i += 1;
        }
    }

    // Infinity (sensible à la casse, comme le navigateur)
    let reste: String = chars[i..].iter().collect();
    if reste.starts_with("Infinity") {
        return Some(if negatif {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let mut entier = String::new();
    while i < chars.len() && chars[i].is_ascii_digit() {
        entier.push(chars[i]);
        i += 1;
    }

    let mut fraction = String::new();
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            fraction.push(chars[i]);
            i += 1;
        }
    }

    if entier.is_empty() && fraction.is_empty() {
        return None;
    }

    // Exposant : seulement s’il est suivi d’au moins un chiffre
    let mut exposant = String::new();
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        let mut signe_exp = String::new();
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            signe_exp.push(chars[j]);
            j += 1;
        }
        let debut = j;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut {
            let chiffres: String = chars[debut..j].iter().collect();
            exposant = format!("e{signe_exp}{chiffres}");
        }
    }

    // Forme normalisée (jamais "5." ni ".5") avant parse
    let mut normal = String::new();
    if negatif {
        normal.push('-');
    }
    if entier.is_empty() {
        normal.push('0');
    } else {
        normal.push_str(&entier);
    }
    if !fraction.is_empty() {
        normal.push('.');
        normal.push_str(&fraction);
    }
    normal.push_str(&exposant);

    normal.parse::<f64>().ok()
}

/* ------------------------ Écriture ------------------------ */

/// Écrit un f64 comme le ferait un navigateur (`String(x)`).
///
/// Chiffres = plus courte représentation qui relit le même double
/// (donc 0.1 + 0.2 -> "0.30000000000000004").
/// Notation exponentielle si l’exposant décimal sort de [-6, 21[.
pub fn formater_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // 0 et -0 -> "0"
    if x == 0.0 {
        return "0".to_string();
    }
    if x < 0.0 {
        return format!("-{}", formater_nombre(-x));
    }

    let (chiffres, n) = chiffres_et_position(x);
    let k = chiffres.len() as i32;

    if k <= n && n <= 21 {
        // entier : chiffres + zéros
        let mut out = chiffres;
        for _ in 0..(n - k) {
            out.push('0');
        }
        out
    } else if 0 < n && n <= 21 {
        let (a, b) = chiffres.split_at(n as usize);
        format!("{a}.{b}")
    } else if -6 < n && n <= 0 {
        let mut out = String::from("0.");
        for _ in 0..(-n) {
            out.push('0');
        }
        out.push_str(&chiffres);
        out
    } else {
        let e = n - 1;
        let signe = if e < 0 { '-' } else { '+' };
        let (tete, queue) = chiffres.split_at(1);
        if queue.is_empty() {
            format!("{tete}e{signe}{}", e.abs())
        } else {
            format!("{tete}.{queue}e{signe}{}", e.abs())
        }
    }
}

/// (chiffres significatifs, position de la virgule) pour x > 0 fini.
/// x = 0.chiffres × 10^n
fn chiffres_et_position(x: f64) -> (String, i32) {
    // `{:e}` donne déjà la plus courte mantisse : "3.0000000000000004e-1"
    let sci = format!("{x:e}");
    let (mantisse, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    let mut chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    while chiffres.len() > 1 && chiffres.ends_with('0') {
        chiffres.pop();
    }

    (chiffres, exp + 1)
}
