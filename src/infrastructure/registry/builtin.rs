//! Built-in template tables.
//!
//! Each table lists `(template, tags)` pairs in the order entries are rendered.
//! Templates without their category's placeholder point at lookup sites that
//! take the value through their own search form.

use crate::domain::entities::Category;

const PROFILE: &[&str] = &["profile", "social media"];

pub(crate) const EMAIL: &[(&str, &[&str])] = &[
    ("https://viewdns.info/reversewhois/?q=$email", &["domain", "whois"]),
    ("https://epieos.com/?q=$email&t=email", &["Google", "Name"]),
    ("https://thatsthem.com/email/$email", &["Google", "Name"]),
    ("https://google.com/search?q=%22$email%22", &["Google", "Name"]),
];

pub(crate) const USERNAME: &[(&str, &[&str])] = &[
    ("https://about.me/$username", PROFILE),
    ("https://ask.fm/$username", PROFILE),
    ("https://buzzfeed.com/$username", PROFILE),
    ("https://chaos.social/@$username", PROFILE),
    ("https://community.eintracht.de/fans/$username", PROFILE),
    ("https://imgur.com/user/$username", PROFILE),
    ("https://medium.com/@$username", PROFILE),
    ("https://myspace.com/$username", PROFILE),
    ("https://pastebin.com/u/$username", PROFILE),
    ("https://play.google.com/store/apps/developer?id=$username", PROFILE),
    ("https://soundcloud.com/$username", PROFILE),
    ("https://themeforest.net/user/$username", PROFILE),
    ("https://twitter.com/$username", PROFILE),
    ("https://behance.net/$username", PROFILE),
    ("https://reverbnation.com/$username", PROFILE),
    ("https://wykop.pl/ludzie/$username", PROFILE),
    ("https://$username.bandcamp.com/", PROFILE),
    ("https://$username.newgrounds.com", PROFILE),
    ("http://dating.ru/$username", PROFILE),
    ("http://en.gravatar.com/$username", PROFILE),
    ("http://forum.3dnews.ru/member.php?username=$username", PROFILE),
    ("http://forum.igromania.ru/member.php?username=$username", PROFILE),
    ("http://promodj.com/$username", PROFILE),
    ("http://uid.me/$username", PROFILE),
    ("http://authorstream.com/$username/", PROFILE),
    ("http://jeuxvideo.com/profil/$username?mode=infos", PROFILE),
    ("http://wikidot.com/user:info/$username", PROFILE),
    ("https://$username.blogspot.com", PROFILE),
    ("https://$username.booth.pm/", PROFILE),
    ("https://$username.carbonmade.com", PROFILE),
    ("https://$username.contently.com/", PROFILE),
    ("https://$username.crevado.com", PROFILE),
    ("https://$username.deviantart.com", PROFILE),
    ("https://$username.exposure.co/", PROFILE),
    ("https://$username.gitbook.io/", PROFILE),
    ("https://$username.itch.io/", PROFILE),
    ("https://$username.jimdosite.com", PROFILE),
    ("https://$username.livejournal.com", PROFILE),
    ("https://$username.newgrounds.com", PROFILE),
    ("https://$username.rajce.idnes.cz/", PROFILE),
    ("https://$username.skyrock.com/", PROFILE),
    ("https://$username.slack.com", PROFILE),
    ("https://$username.smugmug.com", PROFILE),
    ("https://$username.webnode.cz/", PROFILE),
    ("https://$username.weebly.com/", PROFILE),
    ("https://$username.wix.com", PROFILE),
    ("https://$username.wordpress.com/", PROFILE),
    ("https://$username.www.nn.ru/", PROFILE),
    ("https://2Dimensions.com/a/$username", PROFILE),
    ("https://8tracks.com/$username", PROFILE),
    ("https://account.venmo.com/u/$username", PROFILE),
    ("https://admireme.vip/$username", PROFILE),
    ("https://airbit.com/$username", PROFILE),
    ("https://airlinepilot.life/u/$username", PROFILE),
    ("https://akniga.org/profile/$username", PROFILE),
    ("https://allmylinks.com/$username", PROFILE),
    ("https://aminoapps.com/u/$username", PROFILE),
    ("https://anilist.co/user/$username/", PROFILE),
    ("https://apclips.com/$username", PROFILE),
    ("https://api.mojang.com/users/profiles/minecraft/$username", PROFILE),
    ("https://app.intigriti.com/profile/$username", PROFILE),
    ("https://apps.runescape.com/runemetrics/app/overview/player/$username", PROFILE),
    ("https://archive.org/details/@$username", PROFILE),
    ("https://archiveofourown.org/users/$username", PROFILE),
    ("https://asciinema.org/~$username", PROFILE),
    ("https://ask.fedoraproject.org/u/$username", PROFILE),
    ("https://audiojungle.net/user/$username", PROFILE),
    ("https://auth.geeksforgeeks.org/user/$username", PROFILE),
    ("https://bezuzyteczna.pl/uzytkownicy/$username", PROFILE),
    ("https://bitbucket.org/$username/", PROFILE),
    ("https://bitcoinforum.com/profile/$username", PROFILE),
    ("https://blip.fm/$username", PROFILE),
    ("https://blog.naver.com/$username", PROFILE),
    ("https://bodyspace.bodybuilding.com/$username", PROFILE),
    ("https://buymeacoff.ee/$username", PROFILE),
    ("https://caddy.community/u/$username/summary", PROFILE),
    ("https://career.habr.com/$username", PROFILE),
    ("https://ch.tetr.io/u/$username", PROFILE),
    ("https://chaturbate.com/$username", PROFILE),
    ("https://choice.community/u/$username/summary", PROFILE),
    ("https://clapperapp.com/$username", PROFILE),
    ("https://codeforces.com/profile/$username", PROFILE),
    ("https://codepen.io/$username", PROFILE),
    ("https://coderwall.com/$username", PROFILE),
    ("https://codesnippets.fandom.com/wiki/User:$username", PROFILE),
    ("https://coinvote.cc/profile/$username", PROFILE),
    ("https://community.bitwarden.com/u/$username/summary", PROFILE),
    ("https://community.brave.com/u/$username/", PROFILE),
    ("https://community.cartalk.com/u/$username/summary", PROFILE),
    ("https://community.cloudflare.com/u/$username", PROFILE),
    ("https://community.cryptomator.org/u/$username", PROFILE),
    ("https://community.icons8.com/u/$username/summary", PROFILE),
    ("https://community.native-instruments.com/profile/$username", PROFILE),
    ("https://community.oracle.com/people/$username", PROFILE),
    ("https://community.signalusers.org/u/$username", PROFILE),
    ("https://community.windy.com/user/$username", PROFILE),
    ("https://community.wolfram.com/web/$username/home", PROFILE),
    ("https://crowdin.com/profile/$username", PROFILE),
    ("https://ctan.org/author/$username", PROFILE),
    ("https://cults3d.com/en/users/$username/creations", PROFILE),
    ("https://d3.ru/user/$username/posts", PROFILE),
    ("https://data.typeracer.com/pit/profile?user=$username", PROFILE),
    ("https://dev.to/$username", PROFILE),
    ("https://developer.apple.com/forums/profile/$username", PROFILE),
    ("https://deviantart.com/$username", PROFILE),
    ("https://devrant.com/users/$username", PROFILE),
    ("https://discourse.joplinapp.org/u/$username", PROFILE),
    ("https://discourse.wicg.io/u/$username/summary", PROFILE),
    ("https://discuss.elastic.co/u/$username", PROFILE),
    ("https://discussions.apple.com/profile/$username", PROFILE),
    ("https://disqus.com/$username", PROFILE),
    ("https://disqus.com/by/$username", PROFILE),
    ("https://dmoj.ca/user/$username", PROFILE),
    ("https://dribbble.com/$username", PROFILE),
    ("https://ebio.gg/$username", PROFILE),
    ("https://egpu.io/forums/profile/$username/", PROFILE),
    ("https://en.wikipedia.org/wiki/Special:CentralAuth/$username?uselang=qqx", PROFILE),
    ("https://euw.op.gg/summoner/userName=$username", PROFILE),
    ("https://f3.cool/$username/", PROFILE),
    ("https://facebook.com/$username", PROFILE),
    ("https://fameswap.com/user/$username", PROFILE),
    ("https://fiverr.com/$username", PROFILE),
    ("https://flickr.com/people/$username", PROFILE),
    ("https://flipboard.com/@$username", PROFILE),
    ("https://fortnitetracker.com/profile/all/$username", PROFILE),
    ("https://forum.dangerousthings.com/u/$username", PROFILE),
    ("https://forum.guns.ru/forummisc/blog/$username", PROFILE),
    ("https://forum.hackthebox.eu/profile/$username", PROFILE),
    ("https://forum.ionicframework.com/u/$username", PROFILE),
    ("https://forum.leasehackr.com/u/$username/summary/", PROFILE),
    ("https://forum.rclone.org/u/$username", PROFILE),
    ("https://forum.sublimetext.com/u/$username", PROFILE),
    ("https://forum.velomania.ru/member.php?username=$username", PROFILE),
    ("https://forums.envato.com/u/$username", PROFILE),
    ("https://forums.mmorpg.com/profile/$username", PROFILE),
    ("https://forums.pcgamer.com/members/?username=$username", PROFILE),
    ("https://forums.whonix.org/u/$username/summary", PROFILE),
    ("https://fosstodon.org/@$username", PROFILE),
    ("https://freelance.habr.com/freelancers/$username", PROFILE),
    ("https://freesound.org/people/$username/", PROFILE),
    ("https://genius.com/$username", PROFILE),
    ("https://genius.com/artists/$username", PROFILE),
    ("https://gfycat.com/@$username", PROFILE),
    ("https://giphy.com/$username", PROFILE),
    ("https://gitee.com/$username", PROFILE),
    ("https://github.com/$username", PROFILE),
    ("https://github.com/search?q=$username&type=repositories", PROFILE),
    ("https://gitlab.com/$username", PROFILE),
    ("https://gitlab.gnome.org/$username", PROFILE),
    ("https://grep.app/search?q=$username", PROFILE),
    ("https://habr.com/ru/users/$username", PROFILE),
    ("https://hackaday.io/$username", PROFILE),
    ("https://hackerearth.com/@$username", PROFILE),
    ("https://hackerone.com/$username", PROFILE),
    ("https://hackerrank.com/$username", PROFILE),
    ("https://hashnode.com/@$username", PROFILE),
    ("https://help.nextcloud.com/u/$username/summary", PROFILE),
    ("https://holopin.io/@$username", PROFILE),
    ("https://hosted.weblate.org/user/$username/", PROFILE),
    ("https://houzz.com/user/$username", PROFILE),
    ("https://hub.docker.com/u/$username/", PROFILE),
    ("https://hubpages.com/@$username", PROFILE),
    ("https://hubski.com/user/$username", PROFILE),
    ("https://icq.im/$username/en", PROFILE),
    ("https://imgsrc.ru/main/user.php?user=$username", PROFILE),
    ("https://imgup.cz/$username", PROFILE),
    ("https://independent.academia.edu/$username", PROFILE),
    ("https://instagram.com/$username", PROFILE),
    ("https://irc-galleria.net/user/$username", PROFILE),
    ("https://irecommend.ru/users/$username", PROFILE),
    ("https://issuu.com/$username", PROFILE),
    ("https://jbzd.com.pl/uzytkownik/$username", PROFILE),
    ("https://keybase.io/$username", PROFILE),
    ("https://kik.me/$username", PROFILE),
    ("https://ko-fi.com/$username", PROFILE),
    ("https://kwork.ru/user/$username", PROFILE),
    ("https://lab.pentestit.ru/profile/$username", PROFILE),
    ("https://last.fm/user/$username", PROFILE),
    ("https://launchpad.net/~$username", PROFILE),
    ("https://leetcode.com/$username", PROFILE),
    ("https://letterboxd.com/$username", PROFILE),
    ("https://lichess.org/@/$username", PROFILE),
    ("https://linktr.ee/$username", PROFILE),
    ("https://listed.to/@$username", PROFILE),
    ("https://lobste.rs/u/$username", PROFILE),
    ("https://lolchess.gg/profile/na/$username", PROFILE),
    ("https://lottiefiles.com/$username", PROFILE),
    ("https://mapify.travel/$username", PROFILE),
    ("https://mastodon.cloud/@$username", PROFILE),
    ("https://mastodon.social/@$username", PROFILE),
    ("https://mastodon.technology/@$username", PROFILE),
    ("https://mastodon.xyz/@$username", PROFILE),
    ("https://moikrug.ru/$username", PROFILE),
    ("https://monkeytype.com/profile/$username", PROFILE),
    ("https://motherless.com/m/$username", PROFILE),
    ("https://mstdn.io/@$username", PROFILE),
    ("https://music.yandex/users/$username/playlists", PROFILE),
    ("https://my.flightradar24.com/$username", PROFILE),
    ("https://myanimelist.net/profile/$username", PROFILE),
    ("https://nationstates.net/nation=$username", PROFILE),
    ("https://nationstates.net/region=$username", PROFILE),
    ("https://news.ycombinator.com/user?id=$username", PROFILE),
    ("https://nightbot.tv/t/$username/commands", PROFILE),
    ("https://ninjakiwi.com/profile/$username", PROFILE),
    ("https://notabug.org/$username", PROFILE),
    ("https://note.com/$username", PROFILE),
    ("https://nyaa.si/user/$username", PROFILE),
    ("https://ogu.gg/$username", PROFILE),
    ("https://open.spotify.com/user/$username", PROFILE),
    ("https://opensource.com/users/$username", PROFILE),
    ("https://osu.ppy.sh/users/$username", PROFILE),
    ("https://ourdjtalk.com/members?username=$username", PROFILE),
    ("https://packagist.org/packages/$username/", PROFILE),
    ("https://patreon.com/$username", PROFILE),
    ("https://php.ru/forum/members/?username=$username", PROFILE),
    ("https://pikabu.ru/@$username", PROFILE),
    ("https://plugins.gradle.org/u/$username", PROFILE),
    ("https://pocketstars.com/$username", PROFILE),
    ("https://pokemonshowdown.com/users/$username", PROFILE),
    ("https://polarsteps.com/$username", PROFILE),
    ("https://polymart.org/user/$username", PROFILE),
    ("https://pornhub.com/users/$username", PROFILE),
    ("https://pr0gramm.com/user/$username", PROFILE),
    ("https://profil.chatujme.cz/$username", PROFILE),
    ("https://profile.codersrank.io/user/$username/", PROFILE),
    ("https://profiles.wordpress.org/$username/", PROFILE),
    ("https://prog.hu/azonosito/info/$username", PROFILE),
    ("https://psnprofiles.com/$username", PROFILE),
    ("https://pt.bongacams.com/profile/$username", PROFILE),
    ("https://pypi.org/user/$username", PROFILE),
    ("https://queer.af/@$username", PROFILE),
    ("https://rateyourmusic.com/~$username", PROFILE),
    ("https://reddit.com/user/$username", PROFILE),
    ("https://replit.com/@$username", PROFILE),
    ("https://robertsspaceindustries.com/citizens/$username", PROFILE),
    ("https://royalcams.com/profile/$username", PROFILE),
    ("https://rubygems.org/profiles/$username", PROFILE),
    ("https://rumble.com/user/$username", PROFILE),
    ("https://satsis.info/user/$username", PROFILE),
    ("https://scholar.harvard.edu/$username", PROFILE),
    ("https://scratch.mit.edu/users/$username", PROFILE),
    ("https://search.0t.rocks/records?usernames=$username", PROFILE),
    ("https://sessionize.com/$username", PROFILE),
    ("https://sketchfab.com/$username", PROFILE),
    ("https://slashdot.org/~$username", PROFILE),
    ("https://slides.com/$username", PROFILE),
    ("https://slideshare.net/$username", PROFILE),
    ("https://social.tchncs.de/@$username", PROFILE),
    ("https://sourceforge.net/u/$username", PROFILE),
    ("https://soylentnews.org/~$username", PROFILE),
    ("https://speedrun.com/user/$username", PROFILE),
    ("https://spletnik.ru/user/$username", PROFILE),
    ("https://splice.com/$username", PROFILE),
    ("https://splits.io/users/$username", PROFILE),
    ("https://steamcommunity.com/groups/$username", PROFILE),
    ("https://swapd.co/u/$username", PROFILE),
    ("https://t.me/$username", PROFILE),
    ("https://tellonym.me/$username", PROFILE),
    ("https://tenor.com/users/$username", PROFILE),
    ("https://tiktok.com/@$username", PROFILE),
    ("https://tldrlegal.com/users/$username/", PROFILE),
    ("https://traewelling.de/@$username", PROFILE),
    ("https://traktrain.com/$username", PROFILE),
    ("https://translate.jellyfin.org/user/$username/", PROFILE),
    ("https://trashbox.ru/users/$username", PROFILE),
    ("https://trello.com/$username", PROFILE),
    ("https://tryhackme.com/p/$username", PROFILE),
    ("https://tumblr.com/$username", PROFILE),
    ("https://tuna.voicemod.net/user/$username", PROFILE),
    ("https://tweakers.net/gallery/$username", PROFILE),
    ("https://twitch.tv/$username", PROFILE),
    ("https://ultimate-guitar.com/u/$username", PROFILE),
    ("https://unsplash.com/@$username", PROFILE),
    ("https://vero.co/$username", PROFILE),
    ("https://vimeo.com/$username", PROFILE),
    ("https://virgool.io/@$username", PROFILE),
    ("https://vk.com/$username", PROFILE),
    ("https://vsco.co/$username", PROFILE),
    ("https://wiki.vg/User:$username", PROFILE),
    ("https://7cups.com/@$username", PROFILE),
    ("https://9gag.com/u/$username", PROFILE),
    ("https://airliners.net/user/$username/profile/photos", PROFILE),
    ("https://alik.cz/u/$username", PROFILE),
    ("https://allthingsworn.com/profile/$username", PROFILE),
    ("https://artstation.com/$username", PROFILE),
    ("https://autofrage.net/nutzer/$username", PROFILE),
    ("https://avizo.cz/$username/", PROFILE),
    ("https://baby.ru/u/$username/", PROFILE),
    ("https://babyblog.ru/user/$username", PROFILE),
    ("https://bandcamp.com/$username", PROFILE),
    ("https://bazar.cz/$username/", PROFILE),
    ("https://biggerpockets.com/users/$username", PROFILE),
    ("https://bikemap.net/en/u/$username/routes/created/", PROFILE),
    ("https://bookcrossing.com/mybookshelf/$username/", PROFILE),
    ("https://cgtrader.com/$username", PROFILE),
    ("https://championat.com/user/$username", PROFILE),
    ("https://chess.com/member/$username", PROFILE),
    ("https://clozemaster.com/players/$username", PROFILE),
    ("https://clubhouse.com/@$username", PROFILE),
    ("https://cnet.com/profiles/$username/", PROFILE),
    ("https://codecademy.com/profiles/$username", PROFILE),
    ("https://codechef.com/users/$username", PROFILE),
    ("https://codewars.com/users/$username", PROFILE),
    ("https://colourlovers.com/lover/$username", PROFILE),
    ("https://coroflot.com/$username", PROFILE),
    ("https://couchsurfing.com/people/$username", PROFILE),
    ("https://cracked.com/members/$username/", PROFILE),
    ("https://dailykos.com/user/$username", PROFILE),
    ("https://dailymotion.com/$username", PROFILE),
    ("https://dealabs.com/profile/$username", PROFILE),
    ("https://discogs.com/user/$username", PROFILE),
    ("https://drive2.ru/users/$username", PROFILE),
    ("https://duolingo.com/profile/$username", PROFILE),
    ("https://erome.com/$username", PROFILE),
    ("https://etsy.com/shop/$username", PROFILE),
    ("https://eyeem.com/u/$username", PROFILE),
    ("https://fandom.com/u/$username", PROFILE),
    ("https://finanzfrage.net/nutzer/$username", PROFILE),
    ("https://fiverr.com/$username", PROFILE),
    ("https://fixya.com/users/$username", PROFILE),
    ("https://fl.ru/users/$username", PROFILE),
    ("https://flickr.com/people/$username", PROFILE),
    ("https://forumophilia.com/profile.php?mode=viewprofile&u=$username", PROFILE),
    ("https://freecodecamp.org/$username", PROFILE),
    ("https://freelancer.com/u/$username", PROFILE),
    ("https://furaffinity.net/user/$username", PROFILE),
    ("https://g2g.com/$username", PROFILE),
    ("https://gaiaonline.com/profiles/$username", PROFILE),
    ("https://gamespot.com/profile/$username/", PROFILE),
    ("https://geocaching.com/p/default.aspx?u=$username", PROFILE),
    ("https://gesundheitsfrage.net/nutzer/$username", PROFILE),
    ("https://getmyuni.com/user/$username", PROFILE),
    ("https://giantbomb.com/profile/$username/", PROFILE),
    ("https://github.com/$username", PROFILE),
    ("https://goodreads.com/$username", PROFILE),
    ("https://grailed.com/$username", PROFILE),
    ("https://gumroad.com/$username", PROFILE),
    ("https://gutefrage.net/nutzer/$username", PROFILE),
    ("https://hackster.io/$username", PROFILE),
    ("https://heavy-r.com/user/$username", PROFILE),
    ("https://hexrpg.com/userinfo/$username", PROFILE),
    ("https://hunting.ru/forum/members/?username=$username", PROFILE),
    ("https://ifttt.com/p/$username", PROFILE),
    ("https://imagefap.com/profile/$username", PROFILE),
    ("https://instructables.com/member/$username", PROFILE),
    ("https://interpals.net/$username", PROFILE),
    ("https://itemfix.com/c/$username", PROFILE),
    ("https://kaggle.com/$username", PROFILE),
    ("https://keakr.com/en/profile/$username", PROFILE),
    ("https://kickstarter.com/profile/$username", PROFILE),
    ("https://kongregate.com/accounts/$username", PROFILE),
    ("https://lesswrong.com/users/@$username", PROFILE),
    ("https://linux.org.ru/people/$username/profile", PROFILE),
    ("https://livelib.ru/reader/$username", PROFILE),
    ("https://lushstories.com/profile/$username", PROFILE),
    ("https://memrise.com/user/$username/", PROFILE),
    ("https://mercadolivre.com.br/perfil/$username", PROFILE),
    ("https://metacritic.com/user/$username", PROFILE),
    ("https://minds.com/$username/", PROFILE),
    ("https://mixcloud.com/$username/", PROFILE),
    ("https://modelhub.com/$username/videos", PROFILE),
    ("https://motorradfrage.net/nutzer/$username", PROFILE),
    ("https://mydramalist.com/profile/$username", PROFILE),
    ("https://myminifactory.com/users/$username", PROFILE),
    ("https://nairaland.com/$username", PROFILE),
    ("https://needrom.com/author/$username/", PROFILE),
    ("https://nintendolife.com/users/$username", PROFILE),
    ("https://nitrotype.com/racer/$username", PROFILE),
    ("https://npmjs.com/~$username", PROFILE),
    ("https://opennet.ru/~$username", PROFILE),
    ("https://openstreetmap.org/user/$username", PROFILE),
    ("https://patreon.com/$username", PROFILE),
    ("https://pepper.it/profile/$username/overview", PROFILE),
    ("https://periscope.tv/$username/", PROFILE),
    ("https://pinkbike.com/u/$username/", PROFILE),
    ("https://pinterest.com/$username", PROFILE),
    ("https://polygon.com/users/$username", PROFILE),
    ("https://producthunt.com/@$username", PROFILE),
    ("https://redbubble.com/people/$username", PROFILE),
    ("https://reddit.com/user/$username", PROFILE),
    ("https://redtube.com/users/$username", PROFILE),
    ("https://reisefrage.net/nutzer/$username", PROFILE),
    ("https://researchgate.net/profile/$username", PROFILE),
    ("https://roblox.com/user.aspx?username=$username", PROFILE),
    ("https://rockettube.com/$username", PROFILE),
    ("https://rusfootball.info/user/$username/", PROFILE),
    ("https://sbazar.cz/$username", PROFILE),
    ("https://scribd.com/$username", PROFILE),
    ("https://searchblogspot.com/search?q=$username", PROFILE),
    ("https://shitpostbot.com/user/$username", PROFILE),
    ("https://shpock.com/shop/$username/items", PROFILE),
    ("https://slant.co/users/$username", PROFILE),
    ("https://smule.com/$username", PROFILE),
    ("https://snapchat.com/add/$username", PROFILE),
    ("https://sporcle.com/user/$username/people", PROFILE),
    ("https://sportlerfrage.net/nutzer/$username", PROFILE),
    ("https://sports.ru/profile/$username/", PROFILE),
    ("https://strava.com/athletes/$username", PROFILE),
    ("https://svidbook.ru/user/$username", PROFILE),
    ("https://tiktok.com/@$username", PROFILE),
    ("https://tnaflix.com/profile/$username", PROFILE),
    ("https://toster.ru/user/$username/answers", PROFILE),
    ("https://tradingview.com/u/$username/", PROFILE),
    ("https://trakt.tv/users/$username", PROFILE),
    ("https://twitch.tv/$username", PROFILE),
    ("https://virustotal.com/gui/user/$username", PROFILE),
    ("https://warriorforum.com/members/$username.html", PROFILE),
    ("https://wattpad.com/user/$username", PROFILE),
    ("https://wordnik.com/users/$username", PROFILE),
    ("https://younow.com/$username/", PROFILE),
    ("https://zhihu.com/people/$username", PROFILE),
    ("https://znanylekarz.pl/$username", PROFILE),
    ("https://xboxgamertag.com/search/$username", PROFILE),
    ("https://xhamster.com/users/$username", PROFILE),
    ("https://xvideos.com/profiles/$username", PROFILE),
    ("https://youpic.com/photographer/$username/", PROFILE),
    ("https://youporn.com/uservids/$username", PROFILE),
    ("https://youtube.com/@$username", PROFILE),
    ("https://forums.adobe.com/people/$username", PROFILE),
    ("https://angel.co/u/$username", PROFILE),
    ("https://$username.basecamphq.com", PROFILE),
    ("http://blackplanet.com/$username", PROFILE),
    ("https://canva.com/$username", PROFILE),
    ("https://codementor.io/@$username", PROFILE),
    ("https://evewho.com/pilot/$username/", PROFILE),
    ("http://fanpop.com/fans/$username", PROFILE),
    ("https://fotolog.com/$username", PROFILE),
    ("https://foursquare.com/$username", PROFILE),
    ("https://gpodder.net/user/$username", PROFILE),
    ("https://investing.com/traders/$username", PROFILE),
    ("https://khanacademy.org/profile/$username", PROFILE),
    ("https://kiwifarms.net/members/?username=$username", PROFILE),
    ("https://linkedin.com/in/$username", PROFILE),
    ("https://npmjs.com/package/$username", PROFILE),
    ("https://pexels.com/@$username", PROFILE),
    ("https://pixabay.com/en/users/$username", PROFILE),
    ("https://powershellgallery.com/profiles/$username", PROFILE),
    ("https://dating.rambler.ru/page/$username", PROFILE),
    ("http://shockwave.com/member/profiles/$username.jsp", PROFILE),
    ("https://stream.me/$username", PROFILE),
    ("https://user.teknik.io/$username", PROFILE),
    ("https://market.yandex.ru/user/$username/achievements", PROFILE),
    ("http://$username.insanejournal.com/profile", PROFILE),
    ("https://trip.skyscanner.com/user/$username", PROFILE),
    ("https://sports-tracker.com/view_profile/$username", PROFILE),
    ("https://bbs.boingboing.net/u/$username", PROFILE),
    ("https://elwo.ru/index/8-0-$username", PROFILE),
    ("http://ingvarr.net.ru/index/8-0-$username", PROFILE),
    ("https://forum.redsun.tf/members/?username=$username", PROFILE),
    ("https://creativemarket.com/users/$username", PROFILE),
    ("https://pvpru.com/board/member.php?username=$username&tab=aboutme#aboutme", PROFILE),
    ("https://easyen.ru/index/8-0-$username", PROFILE),
    ("http://pedsovet.su/index/8-0-$username", PROFILE),
    ("https://radioskot.ru/index/8-0-$username", PROFILE),
    ("https://coderwall.com/$username", PROFILE),
    ("https://tamtam.chat/$username", PROFILE),
    ("https://zomato.com/pl/$username/foodjourney", PROFILE),
    ("https://mixer.com/$username", PROFILE),
    ("https://api.kano.me/progress/user/$username", PROFILE),
    ("https://yandex.ru/collections/user/$username/", PROFILE),
    ("https://paypal.com/paypalme/$username", PROFILE),
    ("https://imageshack.us/user/$username", PROFILE),
    ("https://$username.en.aptoide.com/", PROFILE),
    ("https://crunchyroll.com/user/$username", PROFILE),
    ("https://support.t-mobile.com/people/$username", PROFILE),
    ("https://opencollective.com/$username", PROFILE),
    ("https://segmentfault.com/u/$username", PROFILE),
    ("http://fr.viadeo.com/en/profile/$username", PROFILE),
    ("https://meetme.com/$username", PROFILE),
    ("https://tracr.co/users/1/$username", PROFILE),
    ("https://taringa.net/$username", PROFILE),
    ("https://photobucket.com/user/$username/library", PROFILE),
    ("https://4pda.ru/forum/index.php?act=search&source=pst&noform=1&username=$username", PROFILE),
    ("http://pokerstrategy.net/user/$username/profile/", PROFILE),
    ("https://filmo.gs/users/$username", PROFILE),
    ("https://500px.com/p/$username", PROFILE),
    ("https://badoo.com/profile/$username", PROFILE),
    ("https://pling.com/u/$username/", PROFILE),
    ("https://realmeye.com/player/$username", PROFILE),
    ("https://travellerspoint.com/users/$username", PROFILE),
    ("https://gdprofiles.com/$username", PROFILE),
    ("https://alltrails.com/members/$username", PROFILE),
    ("https://beta.cent.co/@$username", PROFILE),
    ("https://anobii.com/$username/profile", PROFILE),
    ("https://forums.kali.org/member.php?username=$username", PROFILE),
    ("https://namemc.com/profile/$username", PROFILE),
    ("https://steamid.uk/profile/$username", PROFILE),
    ("https://tripadvisor.com/members/$username", PROFILE),
    ("https://house-mixes.com/profile/$username", PROFILE),
    ("https://quora.com/profile/$username", PROFILE),
    ("https://sparkpeople.com/mypage.asp?id=$username", PROFILE),
    ("https://cloob.com/name/$username", PROFILE),
    ("https://1337x.to/user/$username/", PROFILE),
    ("http://en.tm-ladder.com/$username_rech.php", PROFILE),
    ("https://plug.dj/@/$username", PROFILE),
    ("https://facenama.com/$username", PROFILE),
    ("https://designspiration.net/$username/", PROFILE),
    ("https://capfriendly.com/users/$username", PROFILE),
    ("https://gab.com/$username", PROFILE),
    ("https://fancentro.com/$username", PROFILE),
    ("https://codeforces.com/profile/$username", PROFILE),
    ("https://smashcast.tv/api/media/live/$username", PROFILE),
    ("https://countable.us/$username", PROFILE),
    ("https://open.spotify.com/user/$username", PROFILE),
    ("https://steamcommunity.com/id/$username", PROFILE),
    ("https://raidforums.com/User-$username", PROFILE),
    ("https://pinterest.com/$username/", PROFILE),
    ("https://pcpartpicker.com/user/$username", PROFILE),
    ("https://ebay.com/usr/$username", PROFILE),
    ("https://ebay.de/usr/$username", PROFILE),
    ("https://$username.ghost.io/", PROFILE),
    ("https://discuss.atom.io/u/$username/summary", PROFILE),
    ("https://gam1ng.com.br/user/$username", PROFILE),
    ("https://ogusers.com/$username", PROFILE),
    ("https://otzovik.com/profile/$username", PROFILE),
    ("https://echo.msk.ru/users/$username", PROFILE),
    ("https://ello.co/$username", PROFILE),
    ("https://github.community/u/$username/summary", PROFILE),
    ("https://gurushots.com/$username/photos", PROFILE),
    ("https://g.dev/$username", PROFILE),
    ("https://mastodon.technology/@$username", PROFILE),
    ("https://zoomit.ir/user/$username", PROFILE),
    ("https://facebook.com/$username", PROFILE),
    ("https://binarysearch.io/@/$username", PROFILE),
    ("https://create.arduino.cc/projecthub/$username", PROFILE),
    ("https://kooapp.com/profile/$username", PROFILE),
    ("https://weheartit.com/$username", PROFILE),
    ("https://tinder.com/@$username", PROFILE),
    ("https://coil.com/u/$username", PROFILE),
    ("https://onlyfans.com/$username", PROFILE),
    ("https://instagram.com/$username", PROFILE),
    ("https://ok.ru/$username", PROFILE),
    ("https://forumhouse.ru/members/?username=$username", PROFILE),
    ("https://enjin.com/profile/$username", PROFILE),
    ("https://irl.com/$username", PROFILE),
    ("https://munzee.com/m/$username", PROFILE),
    ("https://quizlet.com/$username", PROFILE),
    ("https://youtube.com/c/$username", PROFILE),
    ("https://youtube.com/user/$username", PROFILE),
    ("https://forums.gunsandammo.com/profile/$username", PROFILE),
];

pub(crate) const DOMAIN: &[(&str, &[&str])] = &[
    ("https://viewdns.info/reverseip/?host=$domain&t=1", &["DNS", "Hosting", "Shared Servers", "IP Lookup"]),
    ("https://viewdns.info/iphistory/?domain=$domain", &["DNS", "History", "Networking", "Domain Information"]),
    ("https://viewdns.info/httpheaders/?domain=$domain", &["DNS", "HTTP Headers", "Networking", "Web Headers"]),
    ("https://web.archive.org/cdx/search/cdx?url=*.$domain&output=xml&fl=original&collapse=urlkey", &["Archives", "Networking", "Web History", "Archived Pages"]),
    ("https://web.archive.org/web/20230000000000*/$domain", &["Archives", "Networking", "Web History", "Archived Pages"]),
    ("https://viewdns.info/dnsrecord/?domain=$domain", &["DNS", "History", "Networking", "DNS Records"]),
    ("https://viewdns.info/portscan/?host=$domain", &["Ports", "Networking", "Security", "Network Scanning"]),
    ("https://crt.sh/?q=$domain", &["Certificates", "Networking", "SSL/TLS", "Certificate Search"]),
    ("https://who.is/whois/$domain", &["Whois", "Networking", "Domain Information", "Whois Lookup"]),
    ("https://securitytrails.com/list/apex_domain/$domain", &["Subdomains", "Networking", "Domain Information", "Subdomain Search"]),
    ("https://urlscan.io/search/#$domain", &["DNS", "Networking", "URL Analysis", "Website Scanning"]),
    ("https://www.shodan.io/search?query=$domain", &["DNS", "Networking", "IoT", "Shodan Search"]),
    ("https://search.censys.io/search?resource=hosts&sort=RELEVANCE&per_page=25&virtual_hosts=EXCLUDE&q=$domain", &["DNS", "Networking", "Security", "Host Search"]),
    ("https://dnshistory.org/dns-records/$domain", &["DNS", "History", "Records", "DNS Record History"]),
    ("https://www.wappalyzer.com/lookup/$domain/", &["Software", "Networking", "Website Analysis", "Technology Detection"]),
    ("https://builtwith.com/$domain", &["DNS", "Hosting", "Subdomains", "Technology Detection"]),
    ("https://sitereport.netcraft.com/?url=http://$domain", &["DNS", "Networking", "Website Analysis", "Site Report"]),
    ("https://www.statscrop.com/www/$domain", &["DNS", "Networking", "Website Analysis", "Website Stats"]),
    ("https://spyonweb.com/$domain", &["DNS", "Networking", "Website Analysis", "Online Visibility"]),
    ("https://securityheaders.com/?q=$domain&followRedirects=on", &["DNS", "Networking", "Security", "HTTP Security Headers"]),
    ("https://github.com/search?q=$domain&type=code", &["DNS", "Code", "Networking", "Code Search"]),
    ("https://grep.app/search?q=$domain", &["DNS", "Networking", "Code", "Code Search"]),
    ("https://trends.google.com/trends/explore?q=$domain", &["DNS", "Trends", "Networking", "Google Trends"]),
    ("https://dnssec-debugger.verisignlabs.com/$domain", &["DNS", "Networking", "DNSSEC", "DNS Security"]),
    ("https://dnsviz.net/d/$domain/analyze/", &["DNS", "Networking", "DNS Analysis", "DNS Visualization"]),
    ("https://buckets.grayhatwarfare.com/files?keywords=$domain", &["DNS", "Networking", "Cloud Storage", "Bucket Search"]),
];

pub(crate) const IP: &[(&str, &[&str])] = &[
    ("https://iknowwhatyoudownload.com/en/peer/?ip=$ip", &["IP", "ip address"]),
];

pub(crate) const PHONE: &[(&str, &[&str])] = &[
    ("https://www.phonevalidator.com/", &["phone", "number"]),
    ("https://spydialer.com/", &["phone", "number"]),
];

pub(crate) const IMAGE: &[(&str, &[&str])] = &[
    ("https://www.aperisolve.com/", &["image", "info"]),
];

/// Built-in table for `category`.
pub(crate) fn table(category: Category) -> &'static [(&'static str, &'static [&'static str])] {
    match category {
        Category::EmailAddress => EMAIL,
        Category::Username => USERNAME,
        Category::Domain => DOMAIN,
        Category::IpAddress => IP,
        Category::PhoneNumber => PHONE,
        Category::Image => IMAGE,
    }
}
